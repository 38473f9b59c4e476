pub mod item;
pub mod opportunity;
pub mod opportunity_id;
pub mod supplier;

pub use item::Item;
pub use opportunity::Opportunity;
pub use opportunity_id::{OpportunityId, PncpReference};
pub use supplier::{AwardStatus, Supplier, PENDING_SUPPLIER};
