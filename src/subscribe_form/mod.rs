//! The email signup form: input state, asynchronous submission to the
//! mailing list, and what to show or where to go once it answers.

mod controller;
mod navigation;
mod outcome;

pub use controller::{FormState, SubmitEvent, SubscribeForm, Submission};
pub use navigation::{ChannelNavigator, Navigator};
pub use outcome::{attempt_subscription, SubscriptionOutcome, TRY_AGAIN_MESSAGE};
