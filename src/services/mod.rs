pub mod intake;
pub mod operator;

pub use intake::{
    ResolvedRecipient, prepare_delivery_visit, prepare_package, prepare_received_item,
    prepare_visitor, resolve_company_name, resolve_recipient,
};
pub use operator::Operator;
