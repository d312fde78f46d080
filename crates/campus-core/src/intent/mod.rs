//! Intent resolution: free text → [`Topic`](crate::knowledge::Topic).

mod resolver;

pub use resolver::{Classification, IntentResolver, IntentRule};
