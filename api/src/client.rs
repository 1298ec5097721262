use crate::espn::{EspnConference, EspnEntry, EspnStat, StandingsResponse};
use crate::{
    Conference, Division, METRIC_LOSSES, METRIC_PLAYOFF_SEED, METRIC_POINT_DIFFERENTIAL,
    METRIC_WINS, METRIC_WIN_PERCENT, StandingsData, TeamEntry,
};
use chrono::{DateTime, Datelike, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_CFB_V2: &str =
    "https://site.web.api.espn.com/apis/v2/sports/football/college-football";
/// ESPN group id for the FCS standings feed.
const FCS_GROUP: u32 = 81;

/// College football standings client backed by ESPN's public endpoints.
#[derive(Debug, Clone)]
pub struct StandingsApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for StandingsApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("cfbracket/0.1 (terminal bracket builder)")
                .build()
                .unwrap_or_default(),
            base_url: ESPN_CFB_V2.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl StandingsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Fetch FBS + FCS conference standings and merge them into one
    /// StandingsData (FBS conferences first).
    ///
    /// `CFBRACKET_STANDINGS_JSON` overrides the network with a local
    /// ESPN-format snapshot; the snapshot is treated as the FBS feed and
    /// the FCS feed is skipped.
    pub async fn fetch_standings(&self) -> ApiResult<StandingsData> {
        if let Ok(path) = std::env::var("CFBRACKET_STANDINGS_JSON")
            && !path.trim().is_empty()
        {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| ApiError::NotFound(format!("could not read {path}: {e}")))?;
            let raw: StandingsResponse = serde_json::from_str(&content)
                .map_err(|e| ApiError::NotFound(format!("invalid standings json at {path}: {e}")))?;
            return Ok(map_standings(raw, StandingsResponse::default()));
        }

        let season = season_year(Utc::now());
        let fbs_url = format!("{}/standings?season={season}", self.base_url);
        let fcs_url = format!("{}/standings?group={FCS_GROUP}&season={season}", self.base_url);

        let fbs: StandingsResponse = self.get(&fbs_url).await?;
        // FCS is best-effort: a missing feed should not sink the FBS data.
        let fcs: StandingsResponse = self.get(&fcs_url).await.unwrap_or_default();

        let data = map_standings(fbs, fcs);
        if data.conferences.is_empty() {
            return Err(ApiError::NotFound(format!(
                "no conference standings returned for season {season}"
            )));
        }
        Ok(data)
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

/// College football seasons span August–January; a January query still
/// belongs to the season that started the previous August.
fn season_year(now: DateTime<Utc>) -> i32 {
    if now.month() >= 8 { now.year() } else { now.year() - 1 }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_standings(fbs: StandingsResponse, fcs: StandingsResponse) -> StandingsData {
    let mut conferences: Vec<Conference> = fbs
        .children
        .unwrap_or_default()
        .iter()
        .filter_map(|c| map_conference(c, Division::Fbs))
        .collect();
    conferences.extend(
        fcs.children
            .unwrap_or_default()
            .iter()
            .filter_map(|c| map_conference(c, Division::Fcs)),
    );
    StandingsData { conferences }
}

/// FCS conferences get an `fcs-` id prefix and an " (FCS)" name suffix so
/// the two divisions can share one flat conference list.
fn map_conference(raw: &EspnConference, division: Division) -> Option<Conference> {
    let base_id = raw.id.clone()?;
    let base_name = raw.name.clone().unwrap_or_else(|| format!("Conference {base_id}"));

    let (id, name) = match division {
        Division::Fbs => (base_id, base_name),
        Division::Fcs => (format!("fcs-{base_id}"), format!("{base_name} (FCS)")),
    };

    let teams = raw
        .standings
        .as_ref()
        .and_then(|s| s.entries.as_ref())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| map_entry(e, &name))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    Some(Conference {
        id,
        name,
        abbreviation: raw.abbreviation.clone().unwrap_or_default(),
        division,
        teams,
    })
}

fn map_entry(raw: &EspnEntry, conference: &str) -> Option<TeamEntry> {
    let team = raw.team.as_ref()?;
    let name = team.display_name.clone()?;
    let stats = raw.stats.as_deref().unwrap_or_default();

    Some(TeamEntry {
        rank: team.rank.filter(|&r| r > 0),
        short_name: team.short_display_name.clone().unwrap_or_else(|| name.clone()),
        name,
        conference: conference.to_owned(),
        record: team_record(stats),
        metrics: build_metrics(stats),
    })
}

/// Overall record: prefer the `overall`/`total` display value, fall back to
/// "{wins}-{losses}", else "N/A".
fn team_record(stats: &[EspnStat]) -> String {
    let overall = stats.iter().find(|s| {
        s.name.as_deref() == Some("overall") || s.stat_type.as_deref() == Some("total")
    });
    if let Some(display) = overall.and_then(|s| s.display_value.clone()) {
        return display;
    }

    let wins = stat_value(stats, "wins");
    let losses = stat_value(stats, "losses");
    match (wins, losses) {
        (Some(w), Some(l)) => format!("{}-{}", w as i64, l as i64),
        _ => "N/A".to_owned(),
    }
}

fn build_metrics(stats: &[EspnStat]) -> HashMap<String, f64> {
    let mut metrics = HashMap::new();
    let mut insert = |key: &str, value: Option<f64>| {
        if let Some(v) = value {
            metrics.insert(key.to_owned(), v);
        }
    };

    insert(METRIC_POINT_DIFFERENTIAL, stat_value(stats, "pointDifferential"));
    insert(METRIC_WINS, stat_value(stats, "wins"));
    insert(METRIC_LOSSES, stat_value(stats, "losses"));
    insert(
        METRIC_WIN_PERCENT,
        stat_value(stats, "winPercent").or_else(|| stat_value(stats, "leagueWinPercent")),
    );
    insert(METRIC_PLAYOFF_SEED, stat_value(stats, "playoffSeed"));
    metrics
}

fn stat_value(stats: &[EspnStat], name: &str) -> Option<f64> {
    stats
        .iter()
        .find(|s| s.name.as_deref() == Some(name))
        .and_then(|s| s.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE_FBS: &str = r#"{
        "children": [
            {
                "id": "8",
                "name": "Southeastern Conference",
                "abbreviation": "SEC",
                "standings": {
                    "entries": [
                        {
                            "team": {
                                "id": "61",
                                "displayName": "Georgia Bulldogs",
                                "shortDisplayName": "Georgia",
                                "abbreviation": "UGA",
                                "rank": 1
                            },
                            "stats": [
                                {"name": "overall", "type": "total", "displayValue": "12-1"},
                                {"name": "wins", "value": 12.0},
                                {"name": "losses", "value": 1.0},
                                {"name": "pointDifferential", "value": 211.0},
                                {"name": "winPercent", "value": 0.923},
                                {"name": "playoffSeed", "value": 1.0}
                            ]
                        },
                        {
                            "team": {
                                "id": "333",
                                "displayName": "Alabama Crimson Tide",
                                "shortDisplayName": "Alabama",
                                "rank": 0
                            },
                            "stats": [
                                {"name": "wins", "value": 9.0},
                                {"name": "losses", "value": 3.0},
                                {"name": "leagueWinPercent", "value": 0.75},
                                {"name": "playoffSeed", "value": 2.0}
                            ]
                        }
                    ]
                }
            }
        ]
    }"#;

    const SAMPLE_FCS: &str = r#"{
        "children": [
            {
                "id": "20",
                "name": "Big Sky Conference",
                "abbreviation": "BSKY",
                "standings": {
                    "entries": [
                        {
                            "team": {
                                "id": "2440",
                                "displayName": "Montana Grizzlies",
                                "shortDisplayName": "Montana",
                                "rank": 24
                            },
                            "stats": [
                                {"name": "overall", "type": "total", "displayValue": "10-2"},
                                {"name": "playoffSeed", "value": 1.0}
                            ]
                        }
                    ]
                }
            }
        ]
    }"#;

    fn parse(json: &str) -> StandingsResponse {
        serde_json::from_str(json).expect("sample json should parse")
    }

    #[test]
    fn season_year_stays_put_from_august_on() {
        let aug = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let dec = Utc.with_ymd_and_hms(2026, 12, 6, 12, 0, 0).unwrap();
        assert_eq!(season_year(aug), 2026);
        assert_eq!(season_year(dec), 2026);
    }

    #[test]
    fn season_year_rolls_back_before_august() {
        let jan = Utc.with_ymd_and_hms(2027, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(season_year(jan), 2026);
    }

    #[test]
    fn maps_record_from_overall_display_value() {
        let data = map_standings(parse(SAMPLE_FBS), StandingsResponse::default());
        let sec = &data.conferences[0];
        assert_eq!(sec.name, "Southeastern Conference");
        assert_eq!(sec.teams[0].record, "12-1");
        assert_eq!(sec.teams[0].rank, Some(1));
    }

    #[test]
    fn record_falls_back_to_wins_losses() {
        let data = map_standings(parse(SAMPLE_FBS), StandingsResponse::default());
        let alabama = &data.conferences[0].teams[1];
        assert_eq!(alabama.record, "9-3");
        assert_eq!(alabama.rank, None, "rank 0 means unranked");
    }

    #[test]
    fn win_percent_falls_back_to_league_win_percent() {
        let data = map_standings(parse(SAMPLE_FBS), StandingsResponse::default());
        let alabama = &data.conferences[0].teams[1];
        assert_eq!(alabama.metric(METRIC_WIN_PERCENT), 0.75);
    }

    #[test]
    fn fcs_conferences_get_prefixed_ids_and_suffixed_names() {
        let data = map_standings(parse(SAMPLE_FBS), parse(SAMPLE_FCS));
        assert_eq!(data.conferences.len(), 2);
        let fcs = &data.conferences[1];
        assert_eq!(fcs.id, "fcs-20");
        assert_eq!(fcs.name, "Big Sky Conference (FCS)");
        assert_eq!(fcs.division, Division::Fcs);
        assert_eq!(fcs.teams[0].conference, "Big Sky Conference (FCS)");
    }

    #[test]
    fn entries_without_team_payload_are_skipped() {
        let raw: StandingsResponse = serde_json::from_str(
            r#"{"children": [{"id": "1", "name": "X", "standings": {"entries": [{"stats": []}]}}]}"#,
        )
        .unwrap();
        let data = map_standings(raw, StandingsResponse::default());
        assert!(data.conferences[0].teams.is_empty());
    }

    #[tokio::test]
    async fn fetch_standings_round_trips_through_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let fbs_mock = server
            .mock("GET", mockito::Matcher::Regex(r"^/standings\?season=\d+$".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SAMPLE_FBS)
            .create_async()
            .await;
        let fcs_mock = server
            .mock(
                "GET",
                mockito::Matcher::Regex(r"^/standings\?group=81&season=\d+$".into()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SAMPLE_FCS)
            .create_async()
            .await;

        let api = StandingsApi::with_base_url(server.url());
        let data = api.fetch_standings().await.expect("fetch should succeed");

        fbs_mock.assert_async().await;
        fcs_mock.assert_async().await;
        assert_eq!(data.conferences.len(), 2);
        assert_eq!(data.top_25().first().map(|t| t.short_name.clone()).as_deref(), Some("Georgia"));
    }
}
