//! Identities of call participants.

use switchboard::backed_model;

backed_model! {
    /// A user, application or device taking part in communications.
    pub struct Identity {
        odata_type: "#microsoft.graph.identity";
        properties {
            /// Display name; not guaranteed to be unique or stable.
            display_name, set_display_name: String => "displayName";
            /// Unique identifier of the identity.
            id, set_id: String => "id";
            tenant_id, set_tenant_id: String => "tenantId";
        }
    }
}

backed_model! {
    /// The set of identities describing one endpoint of a call.
    pub struct IdentitySet {
        odata_type: "#microsoft.graph.communicationsIdentitySet";
        properties {
            application, set_application: Identity => "application";
            application_instance, set_application_instance: Identity => "applicationInstance";
            asserted_identity, set_asserted_identity: Identity => "assertedIdentity";
            device, set_device: Identity => "device";
            /// Endpoint type, such as `default` or `skypeForBusiness`.
            endpoint_type, set_endpoint_type: String => "endpointType";
            guest, set_guest: Identity => "guest";
            on_premises, set_on_premises: Identity => "onPremises";
            phone, set_phone: Identity => "phone";
            user, set_user: Identity => "user";
        }
    }
}

impl IdentitySet {
    /// Creates an identity set for a single user.
    pub fn for_user(id: impl Into<String>, display_name: Option<String>) -> Result<Self, switchboard::StoreError> {
        let mut user = Identity::new();
        user.set_id(Some(id.into()))?;
        user.set_display_name(display_name)?;
        let mut set = Self::new();
        set.set_user(Some(user))?;
        Ok(set)
    }

    /// Creates an identity set for a PSTN phone number.
    pub fn for_phone(number: impl Into<String>) -> Result<Self, switchboard::StoreError> {
        let mut phone = Identity::new();
        phone.set_id(Some(number.into()))?;
        let mut set = Self::new();
        set.set_phone(Some(phone))?;
        Ok(set)
    }
}
