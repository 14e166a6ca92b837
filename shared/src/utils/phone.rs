//! Phone number utilities
//!
//! The application form collects phone numbers as a dial code plus a
//! national number and stores them concatenated (`+49151234567`). The dial
//! codes offered are the fixed set the job board supports.

/// Dial codes selectable in the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryCode {
    Germany,      // +49
    Morocco,      // +212
    France,       // +33
    NorthAmerica, // +1
}

impl CountryCode {
    /// All selectable codes, in the order the form lists them
    pub const ALL: [CountryCode; 4] = [
        CountryCode::Germany,
        CountryCode::Morocco,
        CountryCode::France,
        CountryCode::NorthAmerica,
    ];

    /// The dial code string
    pub fn dial_code(&self) -> &'static str {
        match self {
            CountryCode::Germany => "+49",
            CountryCode::Morocco => "+212",
            CountryCode::France => "+33",
            CountryCode::NorthAmerica => "+1",
        }
    }

    /// Parse a dial code string (e.g. "+49")
    pub fn from_dial_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.dial_code() == code)
    }

    /// Split a stored phone number into its dial code and the remainder
    ///
    /// The first code whose prefix matches wins. Numbers stored without one
    /// of the supported dial codes yield `None`.
    pub fn split_prefix(phone: &str) -> Option<(Self, &str)> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| phone.starts_with(c.dial_code()))
            .map(|c| (c, &phone[c.dial_code().len()..]))
    }

    /// Join this dial code with a national number into the stored format
    pub fn compose(&self, national: &str) -> String {
        format!("{}{}", self.dial_code(), national)
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        CountryCode::Germany
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dial_code())
    }
}

/// Strip everything but ASCII digits
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a phone number for logging (show only last 4 digits)
pub fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }
    format!("***{}", &phone[phone.len() - 4..])
}
