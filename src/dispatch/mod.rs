// Dispatch module - The call boundary
// Resolves (operation name, raw arguments) into typed requests

mod table;

pub use table::{ArgValue, DispatchError, Dispatcher, Request};
