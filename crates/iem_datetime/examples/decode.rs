use iem_datetime::{IemDateTime, parse_datetime_hex};

fn main() -> anyhow::Result<()> {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "00 17 0B 0F 0E 1E 00 00".to_owned());

    let datetime = IemDateTime::from_hex(&input)?;
    eprintln!("{datetime:#?}");
    eprintln!("words: {:04X?}", datetime.to_words());

    println!("{}", parse_datetime_hex(&input));

    Ok(())
}
