pub mod addresses;
pub mod batch;
pub mod delegation;
pub mod lookup;

pub use addresses::ResolveAddressesUseCase;
pub use batch::{BatchOutcome, BatchSummary, RunBatchUseCase};
pub use delegation::WalkDelegationUseCase;
pub use lookup::FindNameServersUseCase;
