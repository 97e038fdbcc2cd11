mod home;
pub use home::Home;

mod signin;
pub use signin::Signin;

mod report;
pub use report::Report;

mod lost_items;
pub use lost_items::LostItems;

mod found_items;
pub use found_items::FoundItems;

mod my_listings;
pub use my_listings::MyListings;

mod notifications;
pub use notifications::Notifications;

mod edit_profile;
pub use edit_profile::EditProfile;

mod verification;
pub use verification::VerificationPage;

mod user_logs;
pub use user_logs::UserLogs;

mod all_user_logs;
pub use all_user_logs::AllUsersLogs;

mod admin_logs;
pub use admin_logs::AdminLogs;

mod contact;
pub use contact::ContactUs;

mod log_browser;
mod report_card;
