// Normalization boundary: every feed row is validated and typed exactly
// once here; downstream code never re-inspects raw columns.
use crate::feed::FeedRow;
use crate::images::ImageTable;
use crate::model::CatalogItem;
use crate::utils::strip_ordinal;

use chrono::NaiveDate;

/// Value of the "En Oferta" column that marks a discounted row.
pub const OFFER_SENTINEL: &str = "SI";

pub const OFFER_BADGE: &str = "OFERTA 🔥";
pub const NEW_BADGE: &str = "¡NUEVO! 🚀";

const UNIT_TITLE_COL: &str = "NOMBRE DE JUEGOS";

/// Strips every non-digit and parses what remains. Hopeless values are 0,
/// never an error.
pub fn clean_price(raw: Option<&str>) -> u32 {
    let digits: String = raw
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Parses the feed's day/month/year date, `-` or `/` separated, ignoring a
/// trailing time component ("01-01-2024" and "01/01/2024 12:30" both work).
pub fn parse_feed_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split_whitespace().next()?;
    let parts: Vec<&str> = date_part.split(['-', '/']).collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Calendar-day distance, time of day zeroed out on both sides.
pub fn is_recent(date: NaiveDate, today: NaiveDate, window_days: i64) -> bool {
    (today - date).num_days().abs() <= window_days
}

fn column_image(row: &FeedRow, column: &str) -> Option<String> {
    row.get(column)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Unit-game rows. Rows without a title are dropped; everything else is
/// coerced to a safe default.
pub fn normalize_units(rows: &[FeedRow], images: &ImageTable) -> Vec<CatalogItem> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let title = row.get(UNIT_TITLE_COL).unwrap_or_default().trim().to_string();
            if title.is_empty() {
                return None;
            }

            let on_offer = row.get("En Oferta").map(str::trim) == Some(OFFER_SENTINEL);
            let regular = clean_price(row.get("Precio"));
            let offer = clean_price(row.get("Precio Oferta"));
            let price = if on_offer { offer } else { regular };
            // Keep the regular price around only while it really is the
            // higher one; a feed typo must not advertise a negative saving.
            let original_price = (on_offer && regular >= price).then_some(regular);

            let image = column_image(row, "imagen")
                .or_else(|| images.resolve(&title).map(String::from));

            Some(CatalogItem {
                id: format!("game-{index}"),
                title,
                image,
                price,
                original_price,
                is_pack: false,
                is_new: false,
                badge: on_offer.then(|| OFFER_BADGE.to_string()),
                included_titles: None,
            })
        })
        .collect()
}

/// Pack rows. Rows without a positive price are dropped; newly added packs
/// are flagged and sorted to the front, feed order preserved within groups.
pub fn normalize_packs(
    rows: &[FeedRow],
    images: &ImageTable,
    today: NaiveDate,
    recent_days: i64,
) -> Vec<CatalogItem> {
    let mut packs: Vec<CatalogItem> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let price = clean_price(row.get("Precio CLP"));
            if price == 0 {
                return None;
            }

            let included: Vec<String> = row
                .get("Juegos Incluidos")
                .unwrap_or_default()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();

            let pack_label = row
                .get("Pack ID")
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from)
                .unwrap_or_else(|| (index + 1).to_string());

            let image = column_image(row, "imagen")
                .or_else(|| column_image(row, "img"))
                .or_else(|| {
                    included
                        .iter()
                        .find_map(|line| images.resolve(strip_ordinal(line)).map(String::from))
                });

            let is_new = row
                .get("fecha")
                .and_then(parse_feed_date)
                .map(|date| is_recent(date, today, recent_days))
                .unwrap_or(false);

            Some(CatalogItem {
                id: format!("pack-{index}"),
                title: format!("Pack {pack_label}"),
                image,
                price,
                original_price: None,
                is_pack: true,
                is_new,
                badge: is_new.then(|| NEW_BADGE.to_string()),
                included_titles: (!included.is_empty()).then_some(included),
            })
        })
        .collect();

    packs.sort_by_key(|pack| !pack.is_new);
    packs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::parse_rows;
    use crate::images::{ImageEntry, ImageTable};

    fn no_images() -> ImageTable {
        ImageTable::default()
    }

    fn d(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn clean_price_strips_non_digits_and_defaults_to_zero() {
        assert_eq!(clean_price(Some("15000")), 15000);
        assert_eq!(clean_price(Some("$15.000 CLP")), 15000);
        assert_eq!(clean_price(Some(" 9.990 ")), 9990);
        assert_eq!(clean_price(Some("gratis")), 0);
        assert_eq!(clean_price(Some("")), 0);
        assert_eq!(clean_price(None), 0);
    }

    #[test]
    fn feed_dates_accept_both_separators_and_trailing_time() {
        assert_eq!(parse_feed_date("01-01-2024"), Some(d(1, 1, 2024)));
        assert_eq!(parse_feed_date("01/01/2024 12:30"), Some(d(1, 1, 2024)));
        assert_eq!(parse_feed_date("25/12/2023"), Some(d(25, 12, 2023)));
        assert_eq!(parse_feed_date("2024"), None);
        assert_eq!(parse_feed_date("31-02-2024"), None);
        assert_eq!(parse_feed_date(""), None);
    }

    #[test]
    fn recency_window_uses_calendar_days() {
        let date = d(1, 1, 2024);
        let today = d(3, 1, 2024);
        assert!(is_recent(date, today, 5));
        assert!(!is_recent(date, today, 1));
        assert!(is_recent(date, today, 2));
    }

    #[test]
    fn unit_rows_without_title_are_dropped() {
        let rows = parse_rows(
            "NOMBRE DE JUEGOS,Precio\nMario Kart 8,15000\n ,9990\nCeleste,abc\n",
        )
        .unwrap();
        let units = normalize_units(&rows, &no_images());
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].title, "Mario Kart 8");
        assert_eq!(units[0].price, 15000);
        // non-numeric price survives as zero
        assert_eq!(units[1].title, "Celeste");
        assert_eq!(units[1].price, 0);
    }

    #[test]
    fn offer_sentinel_selects_offer_price_and_keeps_original() {
        let rows = parse_rows(
            "nombre de juegos,precio,en oferta,precio oferta\n\
             Mario Kart 8,15000,SI,12000\n\
             Celeste,9990,NO,5000\n",
        )
        .unwrap();
        let units = normalize_units(&rows, &no_images());

        assert_eq!(units[0].price, 12000);
        assert_eq!(units[0].original_price, Some(15000));
        assert_eq!(units[0].badge.as_deref(), Some(OFFER_BADGE));

        assert_eq!(units[1].price, 9990);
        assert_eq!(units[1].original_price, None);
        assert_eq!(units[1].badge, None);
    }

    #[test]
    fn inverted_offer_prices_never_violate_the_invariant() {
        let rows = parse_rows(
            "NOMBRE DE JUEGOS,Precio,En Oferta,Precio Oferta\nMario Kart 8,10000,SI,12000\n",
        )
        .unwrap();
        let units = normalize_units(&rows, &no_images());
        assert_eq!(units[0].price, 12000);
        assert_eq!(units[0].original_price, None);
    }

    #[test]
    fn unit_image_falls_back_to_the_lookup_table() {
        let images = ImageTable::from_entries(vec![ImageEntry {
            name: "Mario Kart 8".to_string(),
            url: "https://img.example/mk8.webp".to_string(),
        }]);
        let rows = parse_rows(
            "NOMBRE DE JUEGOS,Precio,imagen\nMario Kart 8,15000,\nCeleste,9990,https://cdn.example/celeste.png\n",
        )
        .unwrap();
        let units = normalize_units(&rows, &images);
        assert_eq!(units[0].image.as_deref(), Some("https://img.example/mk8.webp"));
        assert_eq!(units[1].image.as_deref(), Some("https://cdn.example/celeste.png"));
    }

    #[test]
    fn pack_rows_without_positive_price_are_dropped() {
        let rows = parse_rows(
            "Pack ID,Precio CLP,Juegos Incluidos\n1,20000,Mario Kart 8\n2,0,Zelda\n3,regalo,Metroid\n",
        )
        .unwrap();
        let packs = normalize_packs(&rows, &no_images(), d(1, 6, 2025), 5);
        assert_eq!(packs.len(), 1);
        assert_eq!(packs[0].title, "Pack 1");
        assert_eq!(packs[0].price, 20000);
    }

    #[test]
    fn pack_titles_fall_back_to_the_row_number() {
        let rows = parse_rows("Precio CLP,Juegos Incluidos\n20000,Mario Kart 8\n").unwrap();
        let packs = normalize_packs(&rows, &no_images(), d(1, 6, 2025), 5);
        assert_eq!(packs[0].title, "Pack 1");
        assert_eq!(packs[0].id, "pack-0");
    }

    #[test]
    fn blank_included_list_is_none_not_empty() {
        let rows = parse_rows("Pack ID,Precio CLP,Juegos Incluidos\n9,20000, \n").unwrap();
        let packs = normalize_packs(&rows, &no_images(), d(1, 6, 2025), 5);
        assert_eq!(packs[0].included_titles, None);
    }

    #[test]
    fn pack_image_resolves_through_ordinal_numbered_lines() {
        let images = ImageTable::from_entries(vec![ImageEntry {
            name: "Zelda".to_string(),
            url: "https://img.example/zelda.webp".to_string(),
        }]);
        let rows = parse_rows(
            "Pack ID,Precio CLP,Juegos Incluidos\n1,20000,\"1. Mario Kart 8\n2. Zelda\n\n3. Metroid\"\n",
        )
        .unwrap();
        let packs = normalize_packs(&rows, &images, d(1, 6, 2025), 5);
        let included = packs[0].included_titles.as_ref().unwrap();
        assert_eq!(included.len(), 3);
        assert_eq!(included[0], "1. Mario Kart 8");
        assert_eq!(packs[0].image.as_deref(), Some("https://img.example/zelda.webp"));
    }

    #[test]
    fn recent_packs_are_flagged_and_sorted_first() {
        let rows = parse_rows(
            "Pack ID,Precio CLP,Juegos Incluidos,fecha\n\
             1,20000,Mario Kart 8,01-01-2024\n\
             2,25000,Zelda,10-01-2024\n\
             3,30000,Metroid,no se\n",
        )
        .unwrap();
        let packs = normalize_packs(&rows, &no_images(), d(12, 1, 2024), 5);

        assert_eq!(packs[0].title, "Pack 2");
        assert!(packs[0].is_new);
        assert_eq!(packs[0].badge.as_deref(), Some(NEW_BADGE));

        // unparseable and stale dates are simply not new, in feed order
        assert_eq!(packs[1].title, "Pack 1");
        assert!(!packs[1].is_new);
        assert_eq!(packs[2].title, "Pack 3");
        assert!(!packs[2].is_new);
    }
}
