use lib::prelude::*;
use y2023::schematic::Schematic;

lib::entry! {
    input = "d03.txt", expect = (4361, 467835);

    fn main(mut input: IStr) -> Result<(u128, u128)> {
        let mut lines = Vec::new();

        while let Some(NonEmpty(line)) = input.try_line::<NonEmpty<&[u8]>>()? {
            lines.push(line);
        }

        let schematic = Schematic::from_lines(lines)?;
        let extraction = schematic.extract()?;

        let part1 = extraction.part_number_sum();
        let part2 = extraction.gear_ratio_sum(&schematic);
        Ok((part1, part2))
    }
}
