// crates/atlas-core/src/dashboard.rs

//! Embedded analytics dashboard URL.

use crate::config::DashboardConfig;
use url::form_urlencoded;
use url::Url;

/// Tableau flag that drops the Tableau Public chrome around the view.
const VIZ_HOME_OFF: &str = ":showVizHome=no";

/// Dashboard URL filtered to one state.
///
/// Appends `:showVizHome=no` and `{state_param}={state}` to the base URL's
/// query, keeping whatever query the base already carries. The pair is
/// form-encoded, so `State/Ut` and `Tamil Nadu` become `State%2FUt` and
/// `Tamil+Nadu`.
///
/// ```rust
/// use atlas_core::config::DashboardConfig;
/// use atlas_core::dashboard::dashboard_url;
///
/// let cfg = DashboardConfig {
///     base_url: "https://example.org/views/Crime?:embed=y".into(),
///     state_param: "STATE/UT".into(),
/// };
/// assert_eq!(
///     dashboard_url(&cfg, "Tamil Nadu"),
///     "https://example.org/views/Crime?:embed=y&:showVizHome=no&STATE%2FUT=Tamil+Nadu"
/// );
/// ```
pub fn dashboard_url(cfg: &DashboardConfig, state: &str) -> String {
    let filter = form_urlencoded::Serializer::new(String::new())
        .append_pair(&cfg.state_param, state)
        .finish();

    match Url::parse(&cfg.base_url) {
        Ok(mut url) => {
            let query = match url.query() {
                Some(q) if !q.is_empty() => format!("{q}&{VIZ_HOME_OFF}&{filter}"),
                _ => format!("{VIZ_HOME_OFF}&{filter}"),
            };
            url.set_query(Some(&query));
            url.into()
        }
        Err(e) => {
            // relative or otherwise unparsable base: append by hand
            tracing::debug!("dashboard base URL is not absolute ({e})");
            let sep = if cfg.base_url.contains('?') { '&' } else { '?' };
            format!("{}{sep}{VIZ_HOME_OFF}&{filter}", cfg.base_url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dashboard_keeps_existing_query() {
        let url = dashboard_url(&DashboardConfig::default(), "Kerala");
        assert!(url.starts_with("https://public.tableau.com/views/"));
        assert_eq!(url.matches('?').count(), 1);
        assert!(url.contains(":origin=viz_share_link&:showVizHome=no&State%2FUt=Kerala"));
    }

    #[test]
    fn state_names_cannot_break_out_of_the_query() {
        let url = dashboard_url(&DashboardConfig::default(), "a&b=c#\"<x>");
        assert!(url.ends_with("State%2FUt=a%26b%3Dc%23%22%3Cx%3E"));
    }

    #[test]
    fn relative_base_gets_a_query() {
        let cfg = DashboardConfig {
            base_url: "/dash".into(),
            state_param: "ST_NM".into(),
        };
        assert_eq!(dashboard_url(&cfg, "Goa"), "/dash?:showVizHome=no&ST_NM=Goa");
    }
}
