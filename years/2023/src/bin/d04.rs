use lib::prelude::*;

lib::entry! {
    input = "d04.txt", expect = (13, 30);

    fn main(mut input: IStr) -> Result<(u64, u64)> {
        let cards = input.lines::<Card>().collect::<Result<Vec<_>, _>>()?;

        let mut o1 = 0u64;

        for card in &cards {
            o1 = o1.checked_add(card.score()?).context("score overflow")?;
        }

        Ok((o1, copies(&cards)))
    }
}

/// A scratchcard, reduced to how many of our numbers are winning.
#[derive(Debug)]
struct Card {
    matches: usize,
}

impl Card {
    /// Points of the card, doubling for every match after the first.
    fn score(&self) -> Result<u64> {
        let Some(shift) = self.matches.checked_sub(1) else {
            return Ok(0);
        };

        let shift = u32::try_from(shift)?;
        1u64.checked_shl(shift)
            .with_context(|| anyhow!("score of {} matches overflows", self.matches))
    }
}

lib::from_input! {
    |line: &'static str| -> Card {
        let (_, numbers) = line.split_once(':').context("missing `:`")?;
        let (winning, ours) = numbers.split_once('|').context("missing `|`")?;
        let matches = set(winning)?.intersection(&set(ours)?).count();
        Ok(Card { matches })
    }
}

/// Collect whitespace-separated numbers, ignoring duplicates.
fn set(numbers: &str) -> Result<HashSet<u32>> {
    let mut set = HashSet::new();

    for n in numbers.split_ascii_whitespace() {
        set.insert(n.parse::<u32>()?);
    }

    Ok(set)
}

/// Total number of cards once every card has won copies of the cards that
/// follow it. Copies past the end of the table are dropped.
fn copies(cards: &[Card]) -> u64 {
    let mut copies = vec![1u64; cards.len()];

    for (n, card) in cards.iter().enumerate() {
        let count = copies[n];

        for c in copies.iter_mut().skip(n + 1).take(card.matches) {
            *c += count;
        }
    }

    copies.iter().sum()
}

#[cfg(test)]
mod tests {
    use lib::env::Size;
    use lib::prelude::*;

    use super::{copies, Card};

    fn card(data: &'static str) -> Card {
        let mut input = IStr::new(data.as_bytes(), Size::ZERO);
        input.line::<Card>().unwrap()
    }

    #[test]
    fn test_card() {
        let card = card("Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53\n");

        assert_eq!(card.matches, 4);
        assert_eq!(card.score().unwrap(), 8);
    }

    #[test]
    fn test_no_matches() {
        let card = card("Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11\n");

        assert_eq!(card.matches, 0);
        assert_eq!(card.score().unwrap(), 0);
    }

    #[test]
    fn test_duplicates_count_once() {
        let card = card("Card 1: 5 5 7 | 5 5 5 8\n");

        assert_eq!(card.matches, 1);
    }

    #[test]
    fn test_large_numbers() {
        let card = card("Card 1: 1000 4000000000 | 4000000000 12\n");

        assert_eq!(card.matches, 1);
    }

    #[test]
    fn test_not_a_number() {
        let mut input = IStr::new(b"Card 1: 1 x | 1\n", Size::ZERO);
        assert!(input.line::<Card>().is_err());
    }

    #[test]
    fn test_many_matches() {
        assert_eq!(Card { matches: 40 }.score().unwrap(), 1 << 39);
        assert_eq!(Card { matches: 64 }.score().unwrap(), 1 << 63);
        assert!(Card { matches: 65 }.score().is_err());
    }

    #[test]
    fn test_copies_clipped() {
        // The last card wins copies of cards which don't exist.
        let cards = [Card { matches: 1 }, Card { matches: 3 }];
        assert_eq!(copies(&cards), 3);
    }

    #[test]
    fn test_copies_sample() {
        let cards = [4, 2, 2, 1, 0, 0].map(|matches| Card { matches });
        assert_eq!(copies(&cards), 30);
    }
}
