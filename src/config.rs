#[cfg(debug_assertions)]
pub fn get_booking_url() -> &'static str {
    "http://localhost:8080/book"  // Stub page when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_booking_url() -> &'static str {
    "https://cal.com/loopwire/scoping"
}
