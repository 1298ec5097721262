/// ESPN API raw wire types — serde shapes for deserializing ESPN standings
/// responses. These map to our clean domain types in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// College football standings  (site.web.api v2)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    /// One child per conference.
    pub children: Option<Vec<EspnConference>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnConference {
    pub id: Option<String>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub standings: Option<EspnStandings>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStandings {
    pub entries: Option<Vec<EspnEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEntry {
    pub team: Option<EspnTeam>,
    pub stats: Option<Vec<EspnStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnTeam {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "shortDisplayName")]
    pub short_display_name: Option<String>,
    pub abbreviation: Option<String>,
    /// National rank; 0 or absent = unranked.
    pub rank: Option<u16>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnStat {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub stat_type: Option<String>,
    /// ESPN sends numeric stats as floats, display strings separately.
    pub value: Option<f64>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}
