//! One-shot notification shown on the next board render.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use strum::{Display, EnumString};

const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Flash {
    EntryCreated,
    EntryUpdated,
    EntryDeleted,
    EmptyDescription,
}

impl Flash {
    pub fn message(&self) -> &'static str {
        match self {
            Self::EntryCreated => "Entry created",
            Self::EntryUpdated => "Entry updated",
            Self::EntryDeleted => "Entry deleted",
            Self::EmptyDescription => "The entry needs a description",
        }
    }
}

pub fn set(jar: CookieJar, flash: Flash) -> CookieJar {
    let cookie = Cookie::build((FLASH_COOKIE, flash.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

/// Read and clear the pending notification, if any.
///
/// Unknown cookie values are dropped silently.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let Some(value) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_survives_a_cookie_round_trip() {
        let jar = set(CookieJar::new(), Flash::EntryUpdated);
        assert_eq!(jar.get(FLASH_COOKIE).unwrap().value(), "entry-updated");

        let (jar, flash) = take(jar);
        assert_eq!(flash, Some(Flash::EntryUpdated));
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn unknown_values_are_ignored() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "bogus"));
        assert_eq!(take(jar).1, None);
    }
}
