use chrono::{DateTime, TimeZone};
use rand::Rng;
use std::fmt::Display;

const USERS: &[&str] = &[
    "james", "jill", "frank", "mary", "john", "paul", "jennifer", "sarah",
];

const SECTIONS: &[&str] = &[
    "/home", "/products", "/about", "/api", "/contact", "/profile", "/report", "/posts",
    "/login", "/cart",
];

const SUBSECTIONS: &[&str] = &[
    "/view.html",
    "/request/865/",
    "/ref=lh_cart",
    "/books?id=321",
    "/user?id=123",
    "/register",
    "/user?id=22&checkout=True",
];

const METHODS: &[&str] = &["POST", "GET", "PUT", "PATCH", "DELETE"];

const STATUSES: &[&str] = &[
    "200", "201", "202", "203", "204", "300", "301", "302", "400", "401", "402", "403", "404",
    "500", "501", "502", "503",
];

const MAX_BYTES: u64 = 10_000;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// One access log line stamped with `now`, without a trailing newline.
pub fn generate_line<R, Tz>(rng: &mut R, now: &DateTime<Tz>) -> String
where
    R: Rng + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let ip: [u8; 4] = rng.random();

    format!(
        "{}.{}.{}.{} - {} [{}] \"{} {}{} HTTP/1.0\" {} {}",
        ip[0],
        ip[1],
        ip[2],
        ip[3],
        pick(rng, USERS),
        now.format("%d/%B/%Y:%H:%M:%S %z"),
        pick(rng, METHODS),
        pick(rng, SECTIONS),
        pick(rng, SUBSECTIONS),
        pick(rng, STATUSES),
        rng.random_range(0..MAX_BYTES),
    )
}
