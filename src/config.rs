pub const SITE_NAME: &str = "Layoutory";
pub const CONTACT_EMAIL: &str = "hello@layoutory.dev";
pub const BOOKING_URL: &str = "https://calendly.com/layoutory/30min";

pub fn mailto_link() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}
