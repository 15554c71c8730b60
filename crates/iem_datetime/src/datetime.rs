use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

// iEM3000 DATETIME register block, four Modbus words (DOCA0005EN-15):
//   Word 0: year since 2000 in the low 7 bits
//   Word 1: month in bits 11..8, day of month in bits 4..0
//   Word 2: hour in bits 12..8, minute in bits 5..0
//   Word 3: milliseconds within the minute (0-59999)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IemDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub millisecond: u16,
}

impl IemDateTime {
    pub fn from_words(words: [u16; 4]) -> Result<Self> {
        let year = 2000 + (words[0] & 0x7F);
        let month = ((words[1] >> 8) & 0x0F) as u8;
        let day = (words[1] & 0x1F) as u8;
        let hour = ((words[2] >> 8) & 0x1F) as u8;
        let minute = (words[2] & 0x3F) as u8;
        let millisecond = words[3];

        if !(1..=12).contains(&month) {
            return Err(anyhow!("month {month} out of range"));
        }
        // Day 31 is accepted for every month; the meter only emits real dates.
        if !(1..=31).contains(&day) {
            return Err(anyhow!("day {day} out of range"));
        }
        if hour > 23 {
            return Err(anyhow!("hour {hour} out of range"));
        }
        if minute > 59 {
            return Err(anyhow!("minute {minute} out of range"));
        }

        Ok(IemDateTime {
            year,
            month,
            day,
            hour,
            minute,
            millisecond,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 8 {
            return Err(anyhow!("DATETIME block is 8 bytes, got {}", bytes.len()));
        }

        let words = hexbytes::words_be(&bytes[..8]);
        Self::from_words([words[0], words[1], words[2], words[3]])
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = hexbytes::strip_non_hex(input);
        if hex.len() < 16 {
            return Err(anyhow!("need 16 hex digits for 8 bytes, got {}", hex.len()));
        }

        let bytes = hexbytes::decode_pairs(&hex)?;
        Self::from_bytes(&bytes)
    }

    pub fn to_words(&self) -> [u16; 4] {
        [
            self.year.saturating_sub(2000) & 0x7F,
            (((self.month & 0x0F) as u16) << 8) | (self.day & 0x1F) as u16,
            (((self.hour & 0x1F) as u16) << 8) | (self.minute & 0x3F) as u16,
            self.millisecond,
        ]
    }

    pub fn to_hex(&self) -> String {
        hexbytes::encode_pairs(&hexbytes::bytes_be(&self.to_words()))
    }

    // None when the fields do not name a real calendar instant (for example
    // day 31 in February, which from_words does not reject).
    pub fn naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)?
            .and_hms_milli_opt(
                self.hour as u32,
                self.minute as u32,
                (self.millisecond / 1000) as u32,
                (self.millisecond % 1000) as u32,
            )
    }
}

impl fmt::Display for IemDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
