//! Messaging hand-off.
//!
//! Submission does not hit a booking server; it produces a pre-filled
//! WhatsApp deep-link to the dispatcher, who confirms out-of-band.
//! Everything here is pure formatting; opening the link is the caller's
//! concern, and a missing messaging client fails silently on their side.

use crate::models::FinalizedBooking;

/// Plain-text dispatcher message summarizing a booking request.
pub fn booking_request_message(booking: &FinalizedBooking) -> String {
    format!(
        "*Cab Booking Request*\n\n\
         *Customer Name:* {}\n\
         *Customer Phone:* {}\n\n\
         *Pickup:* {}\n\
         *Drop:* {}\n\
         *Vehicle:* {}\n\
         *Distance:* {} KM\n\
         *Estimated Fare:* \u{20B9}{}\n\n\
         Please confirm my booking.",
        booking.customer_name,
        booking.customer_phone,
        booking.pickup,
        booking.drop,
        booking.vehicle_name,
        booking.distance_km,
        booking.fare,
    )
}

/// Deep-link that opens the dispatcher chat pre-filled with the booking
/// request.
pub fn booking_request_link(dispatch_number: &str, booking: &FinalizedBooking) -> String {
    let message = booking_request_message(booking);
    format!("https://wa.me/{}?text={}", dispatch_number, urlencoding::encode(&message))
}

/// Deep-link asking the dispatcher for a status update on an existing
/// booking.
pub fn booking_status_link(dispatch_number: &str, booking_id: &str) -> String {
    let message = format!("I'd like an update on my booking ID {}", booking_id);
    format!("https://wa.me/{}?text={}", dispatch_number, urlencoding::encode(&message))
}
