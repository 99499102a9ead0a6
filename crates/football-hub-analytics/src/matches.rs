//! Match analytics
//!
//! The filtered match list is the only section that honours the request
//! filters. Statistics, top-scoring matches and attendance are always
//! computed over every stored match.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use football_hub_db::entities::football_match::{self, Column};
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::aggregate::{percentage, Groups, Mean};
use crate::error::AnalyticsError;
use crate::index::{scan_clubs, scan_matches, ClubIndex};
use crate::views::{ClubView, MatchView};

/// A match with more total goals than this is high scoring
pub const HIGH_SCORING_THRESHOLD: i32 = 4;

pub const TOP_SCORING_LIMIT: usize = 5;

pub const ATTENDANCE_LIMIT: usize = 8;

/// Match list filters exactly as they arrive on the query string
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: Option<String>,
    /// Club key, matched against home and away side
    pub club: Option<String>,
    /// Minimum home score
    pub min_score: Option<String>,
    /// Maximum away score
    pub max_score: Option<String>,
}

impl MatchQuery {
    /// Parse the raw filters. Empty values are ignored and malformed ones
    /// are skipped with a warning rather than rejected.
    pub fn parse(&self) -> MatchFilter {
        let date = non_empty(&self.date).and_then(|raw| {
            let parsed = parse_day(raw);
            if parsed.is_none() {
                warn!("Ignoring malformed date filter: {:?}", raw);
            }
            parsed
        });

        let min_home_score = non_empty(&self.min_score).and_then(|raw| {
            let parsed = parse_score(raw).map(|score| score.ceil() as i32);
            if parsed.is_none() {
                warn!("Ignoring malformed minScore filter: {:?}", raw);
            }
            parsed
        });

        let max_away_score = non_empty(&self.max_score).and_then(|raw| {
            let parsed = parse_score(raw).map(|score| score.floor() as i32);
            if parsed.is_none() {
                warn!("Ignoring malformed maxScore filter: {:?}", raw);
            }
            parsed
        });

        MatchFilter {
            date,
            club: non_empty(&self.club).map(str::to_string),
            min_home_score,
            max_away_score,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validated match list filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFilter {
    /// UTC calendar day of kick-off
    pub date: Option<NaiveDate>,
    pub club: Option<String>,
    pub min_home_score: Option<i32>,
    pub max_away_score: Option<i32>,
}

impl MatchFilter {
    /// Store-side condition; an empty filter matches every match
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(date) = self.date {
            let start = date.and_time(NaiveTime::MIN).and_utc();
            let end = start + Duration::days(1);
            condition = condition
                .add(Column::Date.gte(start))
                .add(Column::Date.lt(end));
        }

        if let Some(ref club) = self.club {
            condition = condition.add(
                Condition::any()
                    .add(Column::HomeClubId.eq(club.as_str()))
                    .add(Column::AwayClubId.eq(club.as_str())),
            );
        }

        if let Some(min) = self.min_home_score {
            condition = condition.add(Column::HomeScore.gte(min));
        }

        if let Some(max) = self.max_away_score {
            condition = condition.add(Column::AwayScore.lte(max));
        }

        condition
    }
}

/// Fields derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub total_goals: i32,
    /// Absolute goal difference
    pub score_difference: i32,
    pub is_high_scoring: bool,
    pub home_win: bool,
    pub away_win: bool,
    pub is_draw: bool,
}

impl MatchOutcome {
    pub fn of(home_score: i32, away_score: i32) -> Self {
        let total_goals = home_score + away_score;
        Self {
            total_goals,
            score_difference: (home_score - away_score).abs(),
            is_high_scoring: total_goals > HIGH_SCORING_THRESHOLD,
            home_win: home_score > away_score,
            away_win: away_score > home_score,
            is_draw: home_score == away_score,
        }
    }
}

/// A match with both clubs joined and its derived fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    #[serde(flatten)]
    pub fixture: MatchView,
    pub home_club: Option<ClubView>,
    pub away_club: Option<ClubView>,
    #[serde(flatten)]
    pub outcome: MatchOutcome,
}

/// Aggregate statistics over all matches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub total_matches: u64,
    pub avg_goals_per_match: f64,
    pub high_scoring_matches: u64,
    pub high_scoring_percentage: f64,
    pub draws: u64,
    pub home_wins: u64,
    pub away_wins: u64,
    pub draw_percentage: f64,
    pub home_win_percentage: f64,
    pub away_win_percentage: f64,
    pub max_goals_in_match: i32,
    pub avg_score_difference: f64,
    /// Sum over matches with a recorded attendance
    pub total_attendance: i64,
    /// Mean over matches with a recorded attendance
    pub avg_attendance: f64,
}

/// Attendance figures for one home club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub club_name: String,
    pub avg_attendance: f64,
    pub max_attendance: i32,
    pub total_matches: u64,
    pub total_attendance: i64,
}

/// Response of the matches endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Filtered matches, newest first
    pub matches: Vec<MatchDetail>,
    pub match_stats: MatchStats,
    pub top_scoring_matches: Vec<MatchDetail>,
    pub attendance_analytics: Vec<AttendanceSummary>,
}

pub fn match_detail(fixture: &football_match::Model, clubs: &ClubIndex<'_>) -> MatchDetail {
    MatchDetail {
        fixture: MatchView::from(fixture),
        home_club: clubs.get(&fixture.home_club_id).map(ClubView::from),
        away_club: clubs.get(&fixture.away_club_id).map(ClubView::from),
        outcome: MatchOutcome::of(fixture.home_score, fixture.away_score),
    }
}

pub fn match_statistics(matches: &[football_match::Model]) -> MatchStats {
    let mut stats = MatchStats::default();
    let mut goals = Mean::default();
    let mut difference = Mean::default();
    let mut attendance = Mean::default();

    for fixture in matches {
        let outcome = MatchOutcome::of(fixture.home_score, fixture.away_score);

        stats.total_matches += 1;
        goals.push(outcome.total_goals as f64);
        difference.push(outcome.score_difference as f64);
        stats.max_goals_in_match = stats.max_goals_in_match.max(outcome.total_goals);

        if outcome.is_high_scoring {
            stats.high_scoring_matches += 1;
        }
        if outcome.is_draw {
            stats.draws += 1;
        }
        if outcome.home_win {
            stats.home_wins += 1;
        }
        if outcome.away_win {
            stats.away_wins += 1;
        }

        if let Some(count) = fixture.attendance {
            stats.total_attendance += i64::from(count);
            attendance.push(count as f64);
        }
    }

    stats.avg_goals_per_match = goals.value_or_zero();
    stats.avg_score_difference = difference.value_or_zero();
    stats.avg_attendance = attendance.value_or_zero();
    stats.high_scoring_percentage = percentage(stats.high_scoring_matches, stats.total_matches);
    stats.draw_percentage = percentage(stats.draws, stats.total_matches);
    stats.home_win_percentage = percentage(stats.home_wins, stats.total_matches);
    stats.away_win_percentage = percentage(stats.away_wins, stats.total_matches);

    stats
}

/// Highest total goals first, newer matches first on ties
pub fn top_scoring_matches(
    matches: &[football_match::Model],
    clubs: &ClubIndex<'_>,
) -> Vec<MatchDetail> {
    let total = |fixture: &football_match::Model| fixture.home_score + fixture.away_score;

    let mut ranked: Vec<&football_match::Model> = matches.iter().collect();
    ranked.sort_by(|a, b| total(b).cmp(&total(a)).then_with(|| b.date.cmp(&a.date)));

    ranked
        .into_iter()
        .take(TOP_SCORING_LIMIT)
        .map(|fixture| match_detail(fixture, clubs))
        .collect()
}

#[derive(Default)]
struct AttendanceTally {
    mean: Mean,
    max: i32,
    total: i64,
    matches: u64,
}

/// Attendance per home club name, busiest grounds first.
///
/// Only matches with a positive attendance and a resolvable home club
/// contribute.
pub fn attendance_analytics(
    matches: &[football_match::Model],
    clubs: &ClubIndex<'_>,
) -> Vec<AttendanceSummary> {
    let mut groups: Groups<&str, AttendanceTally> = Groups::new();

    for fixture in matches {
        let Some(count) = fixture.attendance.filter(|&count| count > 0) else {
            continue;
        };
        let Some(home) = clubs.get(&fixture.home_club_id) else {
            continue;
        };

        let tally = groups.entry(home.name.as_str());
        tally.mean.push(count as f64);
        tally.max = tally.max.max(count);
        tally.total += i64::from(count);
        tally.matches += 1;
    }

    let mut summaries: Vec<AttendanceSummary> = groups
        .into_entries()
        .into_iter()
        .map(|(club_name, tally)| AttendanceSummary {
            club_name: club_name.to_string(),
            avg_attendance: tally.mean.value_or_zero(),
            max_attendance: tally.max,
            total_matches: tally.matches,
            total_attendance: tally.total,
        })
        .collect();

    summaries.sort_by(|a, b| b.avg_attendance.total_cmp(&a.avg_attendance));
    summaries.truncate(ATTENDANCE_LIMIT);
    summaries
}

/// Build the matches report
pub async fn match_report<C: ConnectionTrait>(
    db: &C,
    filter: &MatchFilter,
) -> Result<MatchReport, AnalyticsError> {
    debug!("Building match report with filters: {:?}", filter);

    let filtered = football_match::Entity::find()
        .filter(filter.condition())
        .order_by_desc(Column::Date)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    let all = scan_matches(db).await?;
    let clubs = scan_clubs(db).await?;
    let index = ClubIndex::new(&clubs);

    Ok(MatchReport {
        matches: filtered
            .iter()
            .map(|fixture| match_detail(fixture, &index))
            .collect(),
        match_stats: match_statistics(&all),
        top_scoring_matches: top_scoring_matches(&all, &index),
        attendance_analytics: attendance_analytics(&all, &index),
    })
}
