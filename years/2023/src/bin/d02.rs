use lib::prelude::*;

/// Cubes in the bag.
const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

lib::entry! {
    input = "d02.txt", expect = (8, 2286);

    fn main(mut input: IStr) -> Result<(u32, u32)> {
        let mut o1 = 0;
        let mut o2 = 0;

        while let Some(game) = input.try_line::<Game>()? {
            if game.max.fits_in(&BAG) {
                o1 += game.id;
            }

            o2 += game.max.power();
        }

        Ok((o1, o2))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    #[inline]
    fn fits_in(&self, other: &Cubes) -> bool {
        self.red <= other.red && self.green <= other.green && self.blue <= other.blue
    }

    #[inline]
    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

/// A game along with the largest number of each color drawn.
#[derive(Debug)]
struct Game {
    id: u32,
    max: Cubes,
}

lib::from_input! {
    |line: &'static str| -> Game {
        let (game, draws) = line.split_once(": ").context("missing `: `")?;
        let id = game.strip_prefix("Game ").context("missing `Game`")?.parse::<u32>()?;

        let mut max = Cubes::default();

        for draw in draws.split("; ") {
            for pull in draw.split(", ") {
                let (count, color) = pull.split_once(' ').context("bad pull")?;
                let count = count.parse::<u32>()?;

                let slot = match color {
                    "red" => &mut max.red,
                    "green" => &mut max.green,
                    "blue" => &mut max.blue,
                    other => bail!("unknown color `{other}`"),
                };

                *slot = (*slot).max(count);
            }
        }

        Ok(Game { id, max })
    }
}

#[cfg(test)]
mod tests {
    use lib::env::Size;
    use lib::prelude::*;

    use super::{Cubes, Game};

    #[test]
    fn test_game() {
        let mut input = IStr::new(
            b"Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green\n",
            Size::ZERO,
        );
        let game = input.line::<Game>().unwrap();

        assert_eq!(game.id, 3);
        assert_eq!(
            game.max,
            Cubes {
                red: 20,
                green: 13,
                blue: 6
            }
        );
    }

    #[test]
    fn test_unknown_color() {
        let mut input = IStr::new(b"Game 1: 3 purple\n", Size::ZERO);
        let error = input.line::<Game>().unwrap_err();
        assert_eq!(error.to_string(), "unknown color `purple`");
    }
}
