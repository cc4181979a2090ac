use std::ops::Index;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

const EXCERPT_LEN: usize = 150;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

pub fn parse_date(buf: &str) -> Result<NaiveDate, String> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap();
    }
    let Some(caps) = DATE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date {}", buf));
    };

    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let m: u32 = to_u32(caps.index(1))?;
    let d: u32 = to_u32(caps.index(2))?;
    let y: i32 = to_int(caps.index(3), buf)?;

    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => Ok(date),
        None => Err(format!("Date {} is not a valid calendar date", buf)),
    }
}

pub fn make_excerpt(content: &str) -> String {
    lazy_static! {
        static ref IMG_TAG_REGEX: Regex = Regex::new(r#"<img\s+"[^"]*">"#).unwrap();
        static ref INLINE_TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
    }

    // Image tags are removed from the full content, before truncation, so a
    // tag crossing the cut point never leaks a fragment into the excerpt
    let stripped = IMG_TAG_REGEX.replace_all(content, "");
    let head: String = stripped.chars().take(EXCERPT_LEN).collect();
    let mut excerpt = INLINE_TAG_REGEX.replace_all(&head, "").trim().to_string();

    // The cut check runs against the image-stripped length, not the final
    // tag-stripped excerpt length
    if stripped.chars().count() > EXCERPT_LEN {
        excerpt.push_str("...");
    }

    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let date = parse_date("01/05/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        // Single-digit month and day are fine
        let date = parse_date("1/5/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        let date = parse_date("12/31/1999").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        assert!(parse_date("13/01/2024").is_err());
        assert!(parse_date("02/30/2024").is_err());
        assert!(parse_date("2024-01-05").is_err());
        assert!(parse_date("01/05/24").is_err());
        assert!(parse_date("01/05/2024 extra").is_err());
        assert!(parse_date("someday").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_excerpt_short_content_is_untouched() {
        let excerpt = make_excerpt("Hello world");
        assert_eq!(excerpt, "Hello world");
    }

    #[test]
    fn test_excerpt_truncates_and_appends_ellipsis() {
        let content = "Hello <img \"x.png\"> world, this is a long post that goes beyond \
                       one hundred fifty characters in total length to force truncation and \
                       ellipsis appending at the end of the string.";
        let excerpt = make_excerpt(content);

        assert!(excerpt.ends_with("..."));
        assert!(excerpt.chars().count() <= 153);
        assert!(!excerpt.contains("img"));
        assert!(!excerpt.contains("x.png"));
        assert!(excerpt.starts_with("Hello  world,"));
    }

    #[test]
    fn test_excerpt_image_tag_never_splits_at_cut() {
        // The image tag spans the 150-character boundary of the raw content
        let content = format!("{}<img \"pic.png\">{}", "a".repeat(140), "b".repeat(30));
        let excerpt = make_excerpt(&content);

        assert!(!excerpt.contains('<'));
        assert!(!excerpt.contains("pic.png"));
        assert!(excerpt.ends_with("..."));
        // 140 a's survive, the cut lands inside the b run
        assert!(excerpt.starts_with(&"a".repeat(140)));
    }

    #[test]
    fn test_excerpt_no_spurious_ellipsis_from_image_tags() {
        // Raw length is over 150 only because of the image tag, so no ellipsis
        let content = format!(
            "{}<img \"a-very-long-image-url-that-pushes-the-raw-length-past-one-hundred-fifty.png\">",
            "a".repeat(100)
        );
        let excerpt = make_excerpt(&content);

        assert_eq!(excerpt, "a".repeat(100));
    }

    #[test]
    fn test_excerpt_strips_inline_tags() {
        let excerpt = make_excerpt("Hello <b>world</b>, plain <span class=\"x\">text</span>");
        assert_eq!(excerpt, "Hello world, plain text");
    }

    #[test]
    fn test_excerpt_length_invariant() {
        let content = "word ".repeat(100);
        let excerpt = make_excerpt(&content);
        assert!(excerpt.chars().count() <= 153);
    }
}
