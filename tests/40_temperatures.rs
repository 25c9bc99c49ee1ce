mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn duplicate_reading_for_same_date_is_rejected() -> Result<()> {
    let server = &common::start_server().await?;
    let client = reqwest::Client::new();
    let abbrev = common::create_state(&client, server).await?;
    let city = common::create_city(&client, server, &abbrev, "hot").await?;

    let res = client
        .post(server.url("/temp"))
        .json(&json!({ "city_id": city["id"], "temperature": 80.5, "date": "2024-07-01" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert!(created["id"].is_i64());
    assert_eq!(created["city_id"], city["id"]);
    assert_eq!(created["temperature"], 80.5);
    assert_eq!(created["date"], "2024-07-01");

    let res = client
        .post(server.url("/temp"))
        .json(&json!({ "city_id": city["id"], "temperature": 60.0, "date": "2024-07-01" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "The temp already exists for this date.");

    let res = client
        .post(server.url("/temp"))
        .json(&json!({ "city_id": city["id"], "temperature": 90.5, "date": "2024-07-02" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.get(server.url(&format!("/city/{}", city["id"]))).send().await?;
    let average = res.json::<Value>().await?;
    assert_eq!(average["avg"], 85.5);
    Ok(())
}

#[tokio::test]
async fn climate_average_lists_each_city() -> Result<()> {
    let server = &common::start_server().await?;
    let client = reqwest::Client::new();
    let abbrev = common::create_state(&client, server).await?;
    let climate = common::unique("climate-");
    let first = common::create_city(&client, server, &abbrev, &climate).await?;
    let second = common::create_city(&client, server, &abbrev, &climate).await?;

    for (city, temperature) in [(&first, 10.0), (&second, 20.0)] {
        let res = client
            .post(server.url("/temp"))
            .json(&json!({ "city_id": city["id"], "temperature": temperature, "date": "2024-01-15" }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client.get(server.url(&format!("/temperature/{}", climate))).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let rows = res.json::<Vec<Value>>().await?;
    assert_eq!(rows.len(), 2);
    assert!(rows.contains(&json!({ "climate": climate, "name": first["name"], "avg": 10.0 })));
    assert!(rows.contains(&json!({ "climate": climate, "name": second["name"], "avg": 20.0 })));

    let res = client
        .get(server.url(&format!("/temperature/{}", common::unique("none-"))))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn update_and_delete_reading() -> Result<()> {
    let server = &common::start_server().await?;
    let client = reqwest::Client::new();
    let abbrev = common::create_state(&client, server).await?;
    let city = common::create_city(&client, server, &abbrev, "hot").await?;

    let created = client
        .post(server.url("/temp"))
        .json(&json!({ "city_id": city["id"], "temperature": 70.0, "date": "2024-03-01" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let path = format!("/temperature/{}", created["id"]);

    let res = client
        .put(server.url(&path))
        .json(&json!({ "city_id": city["id"], "temperature": 72.25, "date": "2024-03-02" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        res.json::<Value>().await?,
        json!({ "id": created["id"], "city_id": city["id"], "temperature": 72.25, "date": "2024-03-02" })
    );

    let res = client.delete(server.url(&path)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .put(server.url(&path))
        .json(&json!({ "city_id": city["id"], "temperature": 1.0, "date": "2024-03-03" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "That temperature record is not found.");
    Ok(())
}

#[tokio::test]
async fn moving_reading_onto_taken_date_is_rejected() -> Result<()> {
    let server = &common::start_server().await?;
    let client = reqwest::Client::new();
    let abbrev = common::create_state(&client, server).await?;
    let city = common::create_city(&client, server, &abbrev, "hot").await?;

    let mut ids = Vec::new();
    for date in ["2024-05-01", "2024-05-02"] {
        let res = client
            .post(server.url("/temp"))
            .json(&json!({ "city_id": city["id"], "temperature": 65.0, "date": date }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        ids.push(res.json::<Value>().await?["id"].clone());
    }

    let res = client
        .put(server.url(&format!("/temperature/{}", ids[1])))
        .json(&json!({ "city_id": city["id"], "temperature": 66.0, "date": "2024-05-01" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await?, "The temp already exists for this date.");
    Ok(())
}
