//! [`Command`] definition.

pub mod increment_message_count;
pub mod log_in;
pub mod log_out;
pub mod register;
pub mod resend_otp;
pub mod reset_filters;
pub mod send_chat_message;
pub mod set_search_query;
pub mod submit_listing;
pub mod toggle_favorite;
pub mod update_filters;
pub mod update_subscription;
pub mod verify_otp;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    increment_message_count::IncrementMessageCount, log_in::LogIn,
    log_out::LogOut, register::Register, resend_otp::ResendOtp,
    reset_filters::ResetFilters, send_chat_message::SendChatMessage,
    set_search_query::SetSearchQuery, submit_listing::SubmitListing,
    toggle_favorite::ToggleFavorite, update_filters::UpdateFilters,
    update_subscription::UpdateSubscription, verify_otp::VerifyOtp,
};
