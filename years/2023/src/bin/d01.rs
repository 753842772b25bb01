use lib::prelude::*;

/// Digits spelled out, in order of their value.
const WORDS: [&[u8]; 9] = [
    b"one", b"two", b"three", b"four", b"five", b"six", b"seven", b"eight", b"nine",
];

lib::entry! {
    input = "d01.txt", expect = (209, 281);

    fn main(mut input: IStr) -> Result<(u32, u32)> {
        let mut o1 = 0;
        let mut o2 = 0;

        while let Some(line) = input.try_line::<&[u8]>()? {
            o1 += calibration(line, false);
            o2 += calibration(line, true);
        }

        Ok((o1, o2))
    }
}

/// Combine the first and last digit of a line, or `0` if it has none.
///
/// Every offset is considered so that overlapping words like `twone` yield
/// both of their digits.
fn calibration(line: &[u8], words: bool) -> u32 {
    let mut digits = (0..line.len()).filter_map(|n| digit(line.get(n..)?, words));

    let Some(first) = digits.next() else {
        return 0;
    };

    let last = digits.last().unwrap_or(first);
    first * 10 + last
}

#[inline]
fn digit(s: &[u8], words: bool) -> Option<u32> {
    let &c = s.first()?;

    if c.is_ascii_digit() {
        return Some(u32::from(c - b'0'));
    }

    if !words {
        return None;
    }

    let n = WORDS.iter().position(|&w| s.starts_with(w))?;
    Some(n as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::calibration;

    #[test]
    fn test_digits() {
        assert_eq!(calibration(b"pqr3stu8vwx", false), 38);
        assert_eq!(calibration(b"treb7uchet", false), 77);
        assert_eq!(calibration(b"a0b", false), 0);
        assert_eq!(calibration(b"eightwothree", false), 0);
    }

    #[test]
    fn test_digits_sample() {
        let lines: [&[u8]; 4] = [b"1abc2", b"pqr3stu8vwx", b"a1b2c3d4e5f", b"treb7uchet"];
        let sum = lines
            .iter()
            .map(|line| calibration(line, false))
            .sum::<u32>();
        assert_eq!(sum, 142);
    }

    #[test]
    fn test_words() {
        assert_eq!(calibration(b"eightwothree", true), 83);
        assert_eq!(calibration(b"zoneight234", true), 14);
        assert_eq!(calibration(b"xtwone", true), 21);
        assert_eq!(calibration(b"oneight", true), 18);
        assert_eq!(calibration(b"seven", true), 77);
    }
}
