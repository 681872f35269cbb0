// client.rs
use crate::config::GeocoderConfig;
use crate::domain::apartment::Coordinates;
use crate::geocoder::models::Place;
use crate::geocoder::{GeocodeError, Geocoder};
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client for the OpenStreetMap Nominatim search API.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        // Nominatim's usage policy rejects requests without an identifying agent.
        if config.user_agent.trim().is_empty() {
            return Err(GeocodeError::Config("geocoder.user_agent must be set".into()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let resp = self
            .client
            .get(self.search_url())
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(GeocodeError::Http(status.as_u16(), text));
        }

        let coords = parse_search_response(&text)?;
        debug!("Nominatim '{query}' -> {coords:?}");
        Ok(coords)
    }
}

/// First place of a search response, or `None` when nothing matched.
pub fn parse_search_response(body: &str) -> Result<Option<Coordinates>, GeocodeError> {
    let places: Vec<Place> =
        serde_json::from_str(body).map_err(|e| GeocodeError::JsonParse(e.to_string()))?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };
    if let Some(name) = &place.display_name {
        debug!("Matched {name}");
    }

    let latitude: f64 = place
        .lat
        .trim()
        .parse()
        .map_err(|_| GeocodeError::UnexpectedShape(format!("bad lat '{}'", place.lat)))?;
    let longitude: f64 = place
        .lon
        .trim()
        .parse()
        .map_err(|_| GeocodeError::UnexpectedShape(format!("bad lon '{}'", place.lon)))?;

    Ok(Some(Coordinates {
        latitude,
        longitude,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers a single request with `status` and `body`, handing back the
    /// request line and headers it received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request = String::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line.is_empty() || line == "\r\n" {
                    break;
                }
                request.push_str(&line);
            }

            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            request
        });

        (format!("http://{addr}"), handle)
    }

    fn client_for(base_url: String) -> NominatimClient {
        NominatimClient::new(&GeocoderConfig {
            base_url,
            user_agent: "apartment-tracker-tests".into(),
            ..GeocoderConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn geocode_sends_search_request() {
        let (base_url, server) =
            serve_once("200 OK", r#"[{"lat": "35.78", "lon": "-78.64", "display_name": "Raleigh"}]"#);

        let coords = client_for(base_url).geocode("1 Main St, Raleigh, NC").unwrap();
        assert_eq!(
            coords,
            Some(Coordinates {
                latitude: 35.78,
                longitude: -78.64
            })
        );

        let request = server.join().unwrap();
        let request_line = request.lines().next().unwrap();
        let target = request_line
            .strip_prefix("GET ")
            .and_then(|rest| rest.strip_suffix(" HTTP/1.1"))
            .unwrap();
        let (path, query) = target.split_once('?').unwrap();
        assert_eq!(path, "/search");

        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "1 Main St, Raleigh, NC".to_string()),
                ("format".to_string(), "json".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );

        assert!(request
            .to_lowercase()
            .contains("user-agent: apartment-tracker-tests"));
    }

    #[test]
    fn geocode_reports_http_errors() {
        let (base_url, server) = serve_once("503 Service Unavailable", "try later");

        let result = client_for(base_url).geocode("1 Main St, Raleigh, NC");
        server.join().unwrap();

        assert_eq!(result, Err(GeocodeError::Http(503, "try later".into())));
    }

    #[test]
    fn parses_first_place() {
        let body = r#"[
            {"place_id": 1, "lat": "35.7795897", "lon": "-78.6381787", "display_name": "Raleigh"},
            {"place_id": 2, "lat": "0", "lon": "0", "display_name": "Elsewhere"}
        ]"#;
        assert_eq!(
            parse_search_response(body).unwrap(),
            Some(Coordinates {
                latitude: 35.7795897,
                longitude: -78.6381787
            })
        );
    }

    #[test]
    fn empty_result_is_no_match() {
        assert_eq!(parse_search_response("[]").unwrap(), None);
    }

    #[test]
    fn malformed_bodies_are_errors() {
        assert!(matches!(
            parse_search_response("<html>rate limited</html>"),
            Err(GeocodeError::JsonParse(_))
        ));
        assert!(matches!(
            parse_search_response(r#"[{"lat": "north", "lon": "1"}]"#),
            Err(GeocodeError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn requires_user_agent() {
        let config = GeocoderConfig {
            user_agent: " ".into(),
            ..GeocoderConfig::default()
        };
        assert!(matches!(
            NominatimClient::new(&config),
            Err(GeocodeError::Config(_))
        ));
    }
}
