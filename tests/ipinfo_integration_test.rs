use httpmock::prelude::*;
use iplens::ipinfo::IpInfoClient;
use iplens::Error;

#[tokio::test]
async fn test_lookup_relays_reshaped_report() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/").query_param("q", "203.0.113.7");
        then.status(200).json_body(serde_json::json!({
            "ip": "203.0.113.7",
            "asn": { "asn": 64496, "org": "Example Carrier", "route": "203.0.113.0/24" },
            "location": {
                "city": "Berlin",
                "country": "Germany",
                "country_code": "DE",
                "latitude": 52.52,
                "longitude": 13.4,
                "timezone": "Europe/Berlin"
            },
            "is_datacenter": true
        }));
    });

    let client = IpInfoClient::new(server.base_url()).unwrap();
    let report = client.lookup("203.0.113.7".parse().unwrap()).await.unwrap();

    mock.assert();
    assert_eq!(report.ip, "203.0.113.7");
    assert_eq!(report.network.asn, Some(64496));
    assert_eq!(report.network.org.as_deref(), Some("Example Carrier"));
    assert_eq!(report.location.city.as_deref(), Some("Berlin"));
    assert_eq!(report.location.country_code.as_deref(), Some("DE"));
    assert!(report.security.datacenter);
    assert!(!report.security.vpn);
}

#[tokio::test]
async fn test_lookup_provider_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(429);
    });

    let client = IpInfoClient::new(server.base_url()).unwrap();
    let err = client
        .lookup("203.0.113.7".parse().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Upstream(_)));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn test_lookup_undecodable_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("not json at all");
    });

    let client = IpInfoClient::new(server.base_url()).unwrap();
    let err = client
        .lookup("203.0.113.7".parse().unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Upstream(_)));
}
