//! # Buyer-Info Validation
//!
//! Field-level validation for the shipping form. Each rule is independent;
//! the full error map is recomputed on every call and an empty map means
//! the form is submittable.

use crate::order::BuyerInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field-keyed validation messages.
///
/// Keys are the wire field names (`fullName`, `email`, ...); values are the
/// user-facing messages shown inline next to the field. `BTreeMap` keeps
/// iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Empty map ⇔ form is valid
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Validate a buyer-info record, returning the full error map.
///
/// Synchronous, total, and side-effect-free; the caller blocks submission
/// while the map is non-empty.
pub fn validate_buyer_info(info: &BuyerInfo) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if info.full_name.trim().is_empty() {
        errors.insert("fullName", "Vui lòng nhập họ và tên");
    }

    if info.email.trim().is_empty() {
        errors.insert("email", "Vui lòng nhập email");
    } else if !email_shape_ok(&info.email) {
        errors.insert("email", "Email không hợp lệ");
    }

    if info.phone.trim().is_empty() {
        errors.insert("phone", "Vui lòng nhập số điện thoại");
    } else if !phone_digits_ok(&info.phone) {
        errors.insert("phone", "Số điện thoại không hợp lệ");
    }

    if info.address.trim().is_empty() {
        errors.insert("address", "Vui lòng nhập địa chỉ");
    }

    if info.city.trim().is_empty() {
        errors.insert("city", "Vui lòng chọn tỉnh/thành phố");
    }

    if info.district.trim().is_empty() {
        errors.insert("district", "Vui lòng chọn quận/huyện");
    }

    // ward and note are optional, never validated

    errors
}

/// `local@domain.tld` shape: one `@`, a final `.` in the domain, and no
/// whitespace or `@` inside any of the three segments
fn email_shape_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let segment_ok = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    segment_ok(local) && segment_ok(host) && segment_ok(tld)
}

/// Exactly 10 or 11 digits after stripping every non-digit character
fn phone_digits_ok(phone: &str) -> bool {
    let digit_count = phone.chars().filter(char::is_ascii_digit).count();
    digit_count == 10 || digit_count == 11
}

/// The closed option lists the shipping form offers for city, district,
/// and ward. District and ward lists are deliberately not conditioned on
/// the chosen city; the validator enforces presence only, not membership
/// or cross-field consistency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCatalog {
    pub cities: Vec<String>,
    pub districts: Vec<String>,
    pub wards: Vec<String>,
}

impl Default for RegionCatalog {
    fn default() -> Self {
        let own = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            cities: own(&["Hà Nội", "TP HCM", "Đà Nẵng", "Hải Phòng", "Cần Thơ"]),
            districts: own(&["Quận 1", "Quận 2", "Quận 3", "Quận 4", "Quận 5"]),
            wards: own(&["Phường 1", "Phường 2", "Phường 3", "Phường 4", "Phường 5"]),
        }
    }
}

impl RegionCatalog {
    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn has_district(&self, district: &str) -> bool {
        self.districts.iter().any(|d| d == district)
    }
}
