//! Daily path selection
//!
//! Everything that rotates once a day (the path itself, some captions) goes
//! through one [`DayIndex`], computed from the calendar date alone. No state
//! is stored, so every call on the same date in the same time zone agrees.

use super::{Catalog, CatalogError, CatalogSource};
use crate::core::Path;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use log::{debug, warn};

/// Reference date the day count starts from
pub const EPOCH: (i32, u32, u32) = (1970, 5, 30);

const MILLISECONDS_IN_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days since the epoch, plus the epoch's own timestamp used as a fixed salt
///
/// The salt is the epoch's local-midnight timestamp in milliseconds. It is
/// added to the day count before every rotation; dropping it would change
/// which puzzle falls on which date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayIndex {
    days: i64,
    salt: i64,
}

impl DayIndex {
    #[must_use]
    pub const fn new(days: i64, salt: i64) -> Self {
        Self { days, salt }
    }

    /// Day index of `date` in time zone `tz`
    ///
    /// Both `date` and the epoch are taken at local midnight; the day count
    /// is the floor of the elapsed milliseconds over a day. Returns `None`
    /// only if midnight does not exist in `tz` for either date.
    ///
    /// # Examples
    /// ```
    /// use chrono::{NaiveDate, Utc};
    /// use holdgram::catalog::DayIndex;
    ///
    /// let epoch = NaiveDate::from_ymd_opt(1970, 5, 30).unwrap();
    /// let day = DayIndex::on(epoch, &Utc).unwrap();
    /// assert_eq!(day.days(), 0);
    /// assert_eq!(day.salt(), 149 * 86_400_000);
    /// ```
    pub fn on<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<Self> {
        let (year, month, day) = EPOCH;
        let epoch = midnight(NaiveDate::from_ymd_opt(year, month, day)?, tz)?;
        let today = midnight(date, tz)?;

        let salt = epoch.timestamp_millis();
        let days = (today.timestamp_millis() - salt).div_euclid(MILLISECONDS_IN_DAY);

        Some(Self { days, salt })
    }

    /// Day index for today's date in the local time zone
    #[must_use]
    pub fn today_local() -> Option<Self> {
        Self::on(Local::now().date_naive(), &Local)
    }

    /// Day index for today's date in UTC
    #[must_use]
    pub fn today_utc() -> Option<Self> {
        Self::on(Utc::now().date_naive(), &Utc)
    }

    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    #[inline]
    #[must_use]
    pub const fn salt(&self) -> i64 {
        self.salt
    }

    /// Today's position in a rotation of `len` items, `None` if `len` is zero
    #[must_use]
    pub fn rotate(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some((self.salt + self.days).rem_euclid(len as i64) as usize)
    }

    /// Today's item from `items`
    #[must_use]
    pub fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.rotate(items.len()).map(|i| &items[i])
    }
}

fn midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest()
}

/// Today's puzzle: its 1-based catalog position and parsed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Daily {
    pub identifier: usize,
    pub path: Path,
    pub day: DayIndex,
}

/// Select and parse the catalog entry for `day`
///
/// # Errors
/// Returns `CatalogError::Empty` for an empty catalog and
/// `CatalogError::Malformed` if the selected line does not parse.
pub fn select_path(catalog: &Catalog, day: &DayIndex) -> Result<Daily, CatalogError> {
    let offset = day.rotate(catalog.len()).ok_or(CatalogError::Empty)?;
    let path = catalog.path(offset)?;
    debug!(
        "day {} selects catalog line {} of {}",
        day.days(),
        offset + 1,
        catalog.len()
    );

    Ok(Daily {
        identifier: offset + 1,
        path,
        day: *day,
    })
}

/// Load the catalog from `source` and select the path for `day`
///
/// Any failure (unreadable source, empty catalog, malformed entry) means
/// there is no puzzle today; the cause is logged and `None` returned.
pub fn fetch_daily<S: CatalogSource + ?Sized>(source: &S, day: &DayIndex) -> Option<Daily> {
    match source.load().and_then(|catalog| select_path(&catalog, day)) {
        Ok(daily) => Some(daily),
        Err(err) => {
            warn!("no puzzle available from {}: {err}", source.describe());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;
    use std::io;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    const SALT_UTC: i64 = 12_873_600_000;

    #[test]
    fn day_index_at_epoch() {
        let day = DayIndex::on(date(1970, 5, 30), &Utc).unwrap();
        assert_eq!(day, DayIndex::new(0, SALT_UTC));
    }

    #[test]
    fn day_index_counts_whole_days() {
        assert_eq!(DayIndex::on(date(1970, 5, 31), &Utc).unwrap().days(), 1);
        assert_eq!(DayIndex::on(date(2024, 1, 1), &Utc).unwrap().days(), 19_574);
        assert_eq!(DayIndex::on(date(1970, 5, 29), &Utc).unwrap().days(), -1);
    }

    #[test]
    fn rotate_adds_salt() {
        let day = DayIndex::on(date(2024, 1, 1), &Utc).unwrap();
        // (12_873_600_000 + 19_574) mod 9
        assert_eq!(day.rotate(9), Some(8));
        assert_eq!(day.rotate(1), Some(0));
        assert_eq!(day.rotate(0), None);
    }

    #[test]
    fn choose_rotates_daily() {
        let options = ["the turn", "fourth street"];
        let monday = DayIndex::new(10, 0);
        let tuesday = DayIndex::new(11, 0);
        assert_ne!(monday.choose(&options), tuesday.choose(&options));
        assert_eq!(DayIndex::new(10, 0).choose::<&str>(&[]), None);
    }

    #[test]
    fn select_path_is_stable_within_a_day() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let day = DayIndex::on(date(2025, 3, 14), &Utc).unwrap();

        let first = select_path(&catalog, &day).unwrap();
        let second = select_path(&catalog, &DayIndex::on(date(2025, 3, 14), &Utc).unwrap()).unwrap();

        assert_eq!(first, second);
        assert!(first.identifier >= 1 && first.identifier <= catalog.len());
    }

    #[test]
    fn select_path_identifier_is_one_based() {
        let catalog = Catalog::from_text("{air}\n{dog, god} + s -> {dogs, gods}");
        // salt 0, day 3: 3 mod 2 = 1 -> second line
        let daily = select_path(&catalog, &DayIndex::new(3, 0)).unwrap();
        assert_eq!(daily.identifier, 2);
        assert_eq!(daily.path.len(), 2);
    }

    #[test]
    fn select_path_empty_catalog() {
        let result = select_path(&Catalog::default(), &DayIndex::new(0, 0));
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    struct Failing;

    impl CatalogSource for Failing {
        fn fetch(&self) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::NotFound, "offline"))
        }

        fn describe(&self) -> String {
            "failing source".to_string()
        }
    }

    struct Text(&'static str);

    impl CatalogSource for Text {
        fn fetch(&self) -> io::Result<String> {
            Ok(self.0.to_string())
        }

        fn describe(&self) -> String {
            "inline text".to_string()
        }
    }

    #[test]
    fn fetch_failure_and_empty_catalog_are_the_same() {
        let day = DayIndex::new(0, 0);
        assert!(fetch_daily(&Failing, &day).is_none());
        assert!(fetch_daily(&Text("\n"), &day).is_none());
    }

    #[test]
    fn fetch_malformed_entry_is_unavailable() {
        let day = DayIndex::new(0, 0);
        assert!(fetch_daily(&Text("{alp, lap, pal} + e"), &day).is_none());
        assert!(fetch_daily(&Text("{air}"), &day).is_some());
    }
}
