use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event};
use identityservice::msg::IdType;

#[cw_serde]
pub struct IdentityRegisteredEvent {
    pub owner: Addr,
    pub name: String,
    pub id_type: IdType,
}

impl From<IdentityRegisteredEvent> for Event {
    fn from(val: IdentityRegisteredEvent) -> Self {
        let id_type = match val.id_type {
            IdType::User => "user",
            IdType::Dao => "dao",
        };
        Event::new("identity_registered")
            .add_attribute("owner", val.owner.into_string())
            .add_attribute("name", val.name)
            .add_attribute("id_type", id_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_conversion() {
        let event: Event = IdentityRegisteredEvent {
            owner: Addr::unchecked("addr1"),
            name: "alice".to_string(),
            id_type: IdType::Dao,
        }
        .into();
        assert_eq!(event.ty, "identity_registered");
        assert!(event.attributes.contains(&("name", "alice").into()));
        assert!(event.attributes.contains(&("id_type", "dao").into()));
    }
}
