use cosmwasm_std::{DepsMut, Event, Reply, Response, StdError};
use cw_utils::parse_instantiate_response_data;
use identityservice::msg::{IdType, Identity};

use crate::identityservice::error::ContractError;
use crate::identityservice::events::IdentityRegisteredEvent;
use crate::identityservice::state::{
    DAOS, DAO_COUNT, IDENTITIES, INSTANTIATE_DAO_REPLY_ID, NAMES, PENDING_DAO,
};

pub fn handle_dao_instantiate_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INSTANTIATE_DAO_REPLY_ID {
        return Err(ContractError::UnknownReplyId { id: msg.id });
    }

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    #[allow(deprecated)]
    let data = result.data.ok_or(ContractError::MissingReplyData {})?;
    let res = parse_instantiate_response_data(&data)?;

    let dao_addr = deps.api.addr_validate(&res.contract_address)?;
    let (dao_id, dao_name) = PENDING_DAO.load(deps.storage)?;

    DAOS.save(deps.storage, dao_id, &dao_addr)?;
    DAO_COUNT.save(deps.storage, &dao_id)?;
    IDENTITIES.save(
        deps.storage,
        &dao_addr,
        &Identity {
            owner: dao_addr.clone(),
            name: dao_name.clone(),
            id_type: IdType::Dao,
        },
    )?;
    NAMES.save(deps.storage, &dao_name, &dao_addr)?;

    PENDING_DAO.remove(deps.storage);

    Ok(Response::new()
        .add_event(Event::from(IdentityRegisteredEvent {
            owner: dao_addr.clone(),
            name: dao_name,
            id_type: IdType::Dao,
        }))
        .add_attribute("action", "dao_registered")
        .add_attribute("dao_id", dao_id.to_string())
        .add_attribute("dao_address", dao_addr.to_string()))
}
