//! User-facing text. The form speaks Uzbek only.

pub const ADDRESS_REQUIRED: &str = "IP manzilni kiritish majburiy!";
pub const ADDRESS_BAD_FORMAT: &str =
    "IP manzil formati noto‘g‘ri. Yaroqli IPv4 yoki IPv6 manzilini kiriting.";

/// Shown when the service reports a failure without a message of its own.
pub const LOOKUP_FAILED: &str = "IP maʼlumotlarini olish amalga oshmadi";
/// Shown for network, status and decoding failures. The cause is never surfaced.
pub const LOOKUP_ERROR: &str = "IP maʼlumotlarini olishda xatolik yuz berdi";

pub const PLACEHOLDER: &str = "IP manzilini kiriting (IPv4 yoki IPv6)...";
pub const SUBMIT: &str = "Get Info";
pub const PROCESSING: &str = "Processing";
pub const RESULTS_HEADING: &str = "IP Information Results";
pub const FOOTER: &str =
    "© 2024 IP-Terminal. Barcha huquqlar himoyalangan. Tempiltin tomonidan ishlab chiqilgan!";
