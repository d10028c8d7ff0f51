//! 身分證字號驗證與產生。

use crate::utils::error::{Result, ToolError};
use rand::Rng;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A region letter with its checksum weight and county/city name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub letter: char,
    pub weight: u8,
    pub name: &'static str,
}

const fn region(letter: char, weight: u8, name: &'static str) -> Region {
    Region { letter, weight, name }
}

static REGIONS: [Region; 26] = [
    region('A', 10, "臺北市"),
    region('B', 11, "臺中市"),
    region('C', 12, "基隆市"),
    region('D', 13, "臺南市"),
    region('E', 14, "高雄市"),
    region('F', 15, "新北市"),
    region('G', 16, "宜蘭縣"),
    region('H', 17, "桃園市"),
    region('I', 34, "嘉義市"),
    region('J', 18, "新竹縣"),
    region('K', 19, "苗栗縣"),
    region('L', 20, "臺中縣"),
    region('M', 21, "南投縣"),
    region('N', 22, "彰化縣"),
    region('O', 35, "新竹市"),
    region('P', 23, "雲林縣"),
    region('Q', 24, "嘉義縣"),
    region('R', 25, "臺南縣"),
    region('S', 26, "高雄縣"),
    region('T', 27, "屏東縣"),
    region('U', 28, "花蓮縣"),
    region('V', 29, "臺東縣"),
    region('W', 32, "金門縣"),
    region('X', 30, "澎湖縣"),
    region('Y', 31, "陽明山"),
    region('Z', 33, "連江縣"),
];

// `\d` would also accept non-ASCII digits
static ID_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][12][0-9]{8}$").expect("valid ID shape pattern"));

/// All region letters in table order.
pub fn regions() -> &'static [Region] {
    &REGIONS
}

pub fn find_region(letter: char) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.letter == letter)
}

pub fn region_weight(letter: char) -> Option<u8> {
    find_region(letter).map(|r| r.weight)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn digit(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

impl FromStr for Gender {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" | "M" | "m" => Ok(Gender::Male),
            "2" | "F" | "f" => Ok(Gender::Female),
            other => Err(ToolError::InvalidGender {
                value: other.to_string(),
            }),
        }
    }
}

/// Computes the check digit from a region weight and the eight digits
/// that precede it (gender digit plus seven sequence digits).
fn check_digit(weight: u8, digits: &[u8; 8]) -> u8 {
    let d0 = u32::from(weight / 10);
    let d1 = u32::from(weight % 10);
    let mut sum = d0 + d1 * 9;
    for (offset, digit) in digits.iter().enumerate() {
        let position = offset as u32 + 1;
        sum += u32::from(*digit) * (9 - position);
    }
    ((10 - sum % 10) % 10) as u8
}

/// Checks an ID code and reports why it is rejected.
pub fn check_id_code(code: &str) -> Result<()> {
    if !ID_SHAPE.is_match(code) {
        return Err(ToolError::InvalidShape {
            code: code.to_string(),
        });
    }

    let bytes = code.as_bytes();
    let weight = region_weight(char::from(bytes[0])).ok_or_else(|| ToolError::InvalidRegion {
        region: code[..1].to_string(),
    })?;

    let mut digits = [0u8; 8];
    for (slot, b) in digits.iter_mut().zip(&bytes[1..9]) {
        *slot = b - b'0';
    }
    let expected = check_digit(weight, &digits);
    let found = bytes[9] - b'0';

    if expected == found {
        Ok(())
    } else {
        Err(ToolError::ChecksumMismatch { expected, found })
    }
}

pub fn validate_id_code(code: &str) -> bool {
    check_id_code(code).is_ok()
}

/// Generates a random, valid ID code for the given region and gender.
pub fn generate_id_code(region: char, gender: Gender) -> Result<String> {
    generate_id_code_with(&mut rand::thread_rng(), region, gender)
}

pub fn generate_id_code_with<R: Rng>(
    rng: &mut R,
    region: char,
    gender: Gender,
) -> Result<String> {
    let weight = region_weight(region).ok_or_else(|| ToolError::InvalidRegion {
        region: region.to_string(),
    })?;

    let mut digits = [0u8; 8];
    digits[0] = gender.digit();
    for slot in digits.iter_mut().skip(1) {
        *slot = rng.gen_range(0..10);
    }
    let check = check_digit(weight, &digits);

    let mut code = String::with_capacity(10);
    code.push(region);
    for d in digits.iter().chain(std::iter::once(&check)) {
        code.push(char::from(b'0' + d));
    }

    tracing::debug!("Generated ID for region {} ({})", region, gender.label());
    Ok(code)
}
