//! Week cursor over the planning data.
//!
//! [`PlanningLogicManager`] keeps the full disponibility and reservation
//! collections plus two per-day views for the ISO week containing its
//! cursor. Both views are rebuilt together from the full collections
//! whenever the cursor enters another week.

use std::collections::BTreeMap;

use chrono::{
    DateTime, Datelike, Days, Duration, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use chrono_tz::Tz;
use eyre::{Result, eyre};
use planning_core::models::{disponibility::Disponibility, reservation::Reservation};
use tracing::{debug, info};
use uuid::Uuid;

use crate::source::PlanningSource;

/// Weekday index, 0 is Sunday.
pub type DayIndex = u32;

/// A disponibility with its bounds resolved in the planning timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDisponibility {
    pub id: Uuid,
    pub day: DayIndex,
    /// Midnight of the first day
    pub start: DateTime<Tz>,
    /// 23:59:59.999 of the last day
    pub end: DateTime<Tz>,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

impl PlannedDisponibility {
    pub fn from_disponibility(disponibility: Disponibility, timezone: Tz) -> Result<Self> {
        let day = u32::try_from(disponibility.day)
            .ok()
            .filter(|day| *day < 7)
            .ok_or_else(|| {
                eyre!(
                    "Disponibility {} has an invalid day: {}",
                    disponibility.id,
                    disponibility.day
                )
            })?;

        Ok(Self {
            id: disponibility.id,
            day,
            start: localize(timezone, disponibility.start_date.and_time(NaiveTime::MIN))?,
            end: localize(timezone, disponibility.end_date.and_time(end_of_day()))?,
            opening_time: hours_to_time(disponibility.opening_time),
            closing_time: hours_to_time(disponibility.closing_time),
        })
    }

    /// Whether `at` lies within `[start, end]`.
    pub fn covers(&self, at: &DateTime<Tz>) -> bool {
        self.start <= *at && *at <= self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedReservation {
    pub id: Uuid,
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub owner_id: String,
}

impl PlannedReservation {
    pub fn from_reservation(reservation: Reservation, timezone: Tz) -> Result<Self> {
        Ok(Self {
            id: reservation.id,
            start: localize(timezone, reservation.start_date)?,
            end: localize(timezone, reservation.end_date)?,
            title: reservation.title,
            owner_id: reservation.owner_id,
        })
    }

    /// Whether the start or the end shares both the calendar year and the
    /// ISO week number of `at`. Year and week are matched independently.
    pub fn falls_in_week_of(&self, at: &DateTime<Tz>) -> bool {
        let year = at.year();
        let week = at.iso_week().week();

        (year == self.start.year() || year == self.end.year())
            && (week == self.start.iso_week().week() || week == self.end.iso_week().week())
    }
}

/// Snapshot of the day under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub disponibilities: Vec<PlannedDisponibility>,
    pub reservations: Vec<PlannedReservation>,
    /// Day of the month, 1-based
    pub day_of_month: u32,
    /// e.g. `Thursday 25 August`
    pub day_name: String,
    /// The cursor in UTC, e.g. `2022-08-25T12:00:00.000Z`
    pub iso_string: String,
}

/// Navigable week view over a [`PlanningSource`].
///
/// Navigation takes `&mut self`, so a caller cannot start a move while
/// another one is still fetching.
pub struct PlanningLogicManager<S> {
    source: S,
    timezone: Tz,
    current_week: DateTime<Tz>,
    all_disponibilities: Vec<PlannedDisponibility>,
    all_reservations: Vec<PlannedReservation>,
    week_disponibilities: BTreeMap<DayIndex, Vec<PlannedDisponibility>>,
    week_reservations: BTreeMap<DayIndex, Vec<PlannedReservation>>,
}

impl<S: PlanningSource> PlanningLogicManager<S> {
    /// Creates a manager whose cursor is the current instant. Nothing is
    /// fetched until the first refresh or navigation.
    pub fn new(source: S, timezone: Tz) -> Self {
        Self {
            source,
            timezone,
            current_week: Utc::now().with_timezone(&timezone),
            all_disponibilities: Vec::new(),
            all_reservations: Vec::new(),
            week_disponibilities: BTreeMap::new(),
            week_reservations: BTreeMap::new(),
        }
    }

    /// Refetches the full disponibility collection. The week views are left
    /// as they are until the next [`refresh_week`](Self::refresh_week).
    pub async fn refresh_disponibilities(&mut self) -> Result<()> {
        let fetched = self.source.fetch_disponibilities().await?;
        self.all_disponibilities = normalize_disponibilities(fetched, self.timezone)?;
        Ok(())
    }

    /// Refetches the full reservation collection. The week views are left
    /// as they are until the next [`refresh_week`](Self::refresh_week).
    pub async fn refresh_reservations(&mut self) -> Result<()> {
        let fetched = self.source.fetch_reservations().await?;
        self.all_reservations = normalize_reservations(fetched, self.timezone)?;
        Ok(())
    }

    /// Refetches both collections and rebuilds both week views.
    ///
    /// On failure nothing is replaced.
    pub async fn refresh_week(&mut self) -> Result<()> {
        self.load_week(self.current_week).await
    }

    /// Fetches and buckets the week of `cursor`, then commits the cursor,
    /// the collections and the views together. On failure the manager keeps
    /// its previous cursor and views.
    async fn load_week(&mut self, cursor: DateTime<Tz>) -> Result<()> {
        let (disponibilities, reservations) = tokio::try_join!(
            self.source.fetch_disponibilities(),
            self.source.fetch_reservations(),
        )?;

        let disponibilities = normalize_disponibilities(disponibilities, self.timezone)?;
        let reservations = normalize_reservations(reservations, self.timezone)?;
        let (week_disponibilities, week_reservations) =
            bucket_week(&disponibilities, &reservations, &cursor);

        debug!(
            "Week of {} rebuilt: {} disponibilities, {} reservations",
            cursor,
            week_disponibilities.values().map(Vec::len).sum::<usize>(),
            week_reservations.values().map(Vec::len).sum::<usize>()
        );

        self.current_week = cursor;
        self.all_disponibilities = disponibilities;
        self.all_reservations = reservations;
        self.week_disponibilities = week_disponibilities;
        self.week_reservations = week_reservations;

        Ok(())
    }

    /// The bucket of the cursor's weekday. Empty buckets give empty lists.
    pub fn current_day(&self) -> Day {
        let index = weekday_index(&self.current_week);

        Day {
            disponibilities: self
                .week_disponibilities
                .get(&index)
                .cloned()
                .unwrap_or_default(),
            reservations: self
                .week_reservations
                .get(&index)
                .cloned()
                .unwrap_or_default(),
            day_of_month: self.current_week.day(),
            day_name: self.current_week.format("%A %-d %B").to_string(),
            iso_string: self
                .current_week
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub async fn next_day(&mut self) -> Result<Day> {
        self.move_days(1).await
    }

    pub async fn previous_day(&mut self) -> Result<Day> {
        self.move_days(-1).await
    }

    async fn move_days(&mut self, days: i64) -> Result<Day> {
        let target = shift_days(self.current_week, days, self.timezone)?;

        if target.iso_week() == self.current_week.iso_week() {
            self.current_week = target;
        } else {
            self.load_week(target).await?;
        }

        Ok(self.current_day())
    }

    pub async fn next_week(&mut self) -> Result<()> {
        let target = shift_days(self.current_week, 7, self.timezone)?;
        self.load_week(target).await
    }

    pub async fn previous_week(&mut self) -> Result<()> {
        let target = shift_days(self.current_week, -7, self.timezone)?;
        self.load_week(target).await
    }

    /// Moves the cursor to `date`, expressed in the planning timezone, and
    /// refreshes. The cursor only moves once the week has been loaded.
    pub async fn set_week(&mut self, date: DateTime<Tz>) -> Result<()> {
        let target = date.with_timezone(&self.timezone);
        self.load_week(target).await?;
        info!("Planning cursor set to {}", self.current_week);
        Ok(())
    }

    pub async fn reset_to_today(&mut self) -> Result<()> {
        self.set_week(Utc::now().with_timezone(&self.timezone)).await
    }

    pub fn week_reservations(&self) -> &BTreeMap<DayIndex, Vec<PlannedReservation>> {
        &self.week_reservations
    }

    pub fn week_disponibilities(&self) -> &BTreeMap<DayIndex, Vec<PlannedDisponibility>> {
        &self.week_disponibilities
    }

    pub fn current_week(&self) -> DateTime<Tz> {
        self.current_week
    }

    pub fn disponibilities(&self) -> &[PlannedDisponibility] {
        &self.all_disponibilities
    }

    pub fn reservations(&self) -> &[PlannedReservation] {
        &self.all_reservations
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

type WeekViews = (
    BTreeMap<DayIndex, Vec<PlannedDisponibility>>,
    BTreeMap<DayIndex, Vec<PlannedReservation>>,
);

fn bucket_week(
    disponibilities: &[PlannedDisponibility],
    reservations: &[PlannedReservation],
    cursor: &DateTime<Tz>,
) -> WeekViews {
    let mut week_disponibilities: BTreeMap<DayIndex, Vec<PlannedDisponibility>> = BTreeMap::new();
    for disponibility in disponibilities.iter().filter(|d| d.covers(cursor)) {
        week_disponibilities
            .entry(disponibility.day)
            .or_default()
            .push(disponibility.clone());
    }

    // Keyed by the weekday of each reservation's own start
    let mut week_reservations: BTreeMap<DayIndex, Vec<PlannedReservation>> = BTreeMap::new();
    for reservation in reservations.iter().filter(|r| r.falls_in_week_of(cursor)) {
        week_reservations
            .entry(weekday_index(&reservation.start))
            .or_default()
            .push(reservation.clone());
    }

    (week_disponibilities, week_reservations)
}

fn normalize_disponibilities(
    disponibilities: Vec<Disponibility>,
    timezone: Tz,
) -> Result<Vec<PlannedDisponibility>> {
    disponibilities
        .into_iter()
        .map(|disponibility| PlannedDisponibility::from_disponibility(disponibility, timezone))
        .collect()
}

fn normalize_reservations(
    reservations: Vec<Reservation>,
    timezone: Tz,
) -> Result<Vec<PlannedReservation>> {
    reservations
        .into_iter()
        .map(|reservation| PlannedReservation::from_reservation(reservation, timezone))
        .collect()
}

fn weekday_index(at: &DateTime<Tz>) -> DayIndex {
    at.weekday().num_days_from_sunday()
}

// Wraps around to 23:59:59.999.
fn end_of_day() -> NaiveTime {
    NaiveTime::MIN - Duration::milliseconds(1)
}

/// Fractional hours to a time of day: `8.5` is 08:30, `24.0` is the end of
/// the day.
fn hours_to_time(hours: f64) -> NaiveTime {
    let minutes = (hours * 60.0).round() as i64;
    if minutes >= 24 * 60 {
        return end_of_day();
    }
    NaiveTime::MIN + Duration::minutes(minutes.max(0))
}

/// Resolves a wall-clock time in `timezone`. Ambiguous times take the
/// earlier instant, times skipped by a DST jump move one hour later.
fn localize(timezone: Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    timezone
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            timezone
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
        })
        .ok_or_else(|| eyre!("{} does not exist in {}", naive, timezone))
}

/// Moves by whole calendar days, keeping the wall-clock time.
fn shift_days(at: DateTime<Tz>, days: i64, timezone: Tz) -> Result<DateTime<Tz>> {
    let naive = at.naive_local();
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        naive.checked_add_days(step)
    } else {
        naive.checked_sub_days(step)
    }
    .ok_or_else(|| eyre!("Moving {} days from {} is out of range", days, at))?;

    localize(timezone, shifted)
}
