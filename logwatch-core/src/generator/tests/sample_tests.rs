use crate::generator::generate_line;
use crate::parse::parse_line;
use chrono::{FixedOffset, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn generated_lines_parse() {
    let mut rng = StdRng::seed_from_u64(7);
    let now = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2019, 3, 9, 16, 5, 1)
        .unwrap();

    for _ in 0..500 {
        let line = generate_line(&mut rng, &now);
        let record = parse_line(&line).unwrap_or_else(|e| panic!("{line:?}: {e}"));

        assert_eq!(record.timestamp, "09/March/2019:16:05:01 +0200");
        assert_eq!(record.protocol, "HTTP/1.0");
        assert_eq!(record.remote_logname, "-");
        assert!(record.bytes < 10_000);
        assert_eq!(record.status.len(), 3);
    }
}

#[test]
fn sections_come_from_the_fixed_list() {
    let mut rng = StdRng::seed_from_u64(11);
    let now = chrono::Utc::now();

    for _ in 0..200 {
        let record = parse_line(&generate_line(&mut rng, &now)).unwrap();
        assert!(
            [
                "/home", "/products", "/about", "/api", "/contact", "/profile", "/report",
                "/posts", "/login", "/cart"
            ]
            .contains(&record.section.as_str()),
            "unexpected section {}",
            record.section
        );
    }
}
