mod common;

mod pricelists {
    use httpmock::{
        Method::{DELETE, GET, POST, PUT},
        MockServer,
    };
    use reqwest::StatusCode;
    use serde_json::json;
    use ticketmatic_client_sdk::settings::pricelists::{
        self,
        types::{
            CreatePriceList, PriceList, PriceListParameters, PricelistPrice, PricelistPrices,
            UpdatePriceList,
        },
    };

    use crate::common::{client, path};

    #[tokio::test]
    async fn get_list_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(path("/settings/pricing/pricelists"))
                .query_param("includearchived", "true")
                .query_param_missing("filter")
                .query_param_missing("lastupdatesince");
            then.status(StatusCode::OK).json_body(json!([
                { "id": 2, "name": "Standard", "isarchived": false },
                { "id": 1, "name": "Old", "isarchived": true, "lastupdatets": "2023-01-01 00:00:00" }
            ]));
        });

        let params = PriceListParameters::builder().includearchived(true).build();
        let lists = pricelists::get_list(&client, &params).await?;

        let names: Vec<_> = lists.iter().filter_map(|l| l.name.as_deref()).collect();
        assert_eq!(names, vec!["Standard", "Old"]);
        assert_eq!(lists[1].isarchived, Some(true));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn get_list_empty_should_be_empty() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path(path("/settings/pricing/pricelists"));
            then.status(StatusCode::OK).json_body(json!([]));
        });

        let lists = pricelists::get_list(&client, &PriceListParameters::default()).await?;

        assert!(lists.is_empty());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn get_should_decode_prices() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET).path(path("/settings/pricing/pricelists/2"));
            then.status(StatusCode::OK).json_body(json!({
                "id": 2,
                "name": "Standard",
                "prices": {
                    "pricetypes": [
                        { "pricetypeid": 1, "prices": [30, "25.5"], "conditions": [] }
                    ]
                }
            }));
        });

        let list = pricelists::get(&client, 2).await?;

        let pricetypes = list.prices.and_then(|p| p.pricetypes).unwrap_or_default();
        assert_eq!(pricetypes.len(), 1);
        assert_eq!(pricetypes[0].prices, Some(vec![30.0, 25.5]));
        assert_eq!(pricetypes[0].conditions, Some(vec![]));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn create_and_update_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let create = server.mock(|when, then| {
            when.method(POST)
                .path(path("/settings/pricing/pricelists"))
                .json_body(json!({
                    "name": "Festival",
                    "prices": { "pricetypes": [{ "pricetypeid": 1, "prices": [10.0] }] }
                }));
            then.status(StatusCode::OK)
                .json_body(json!({ "id": 3, "name": "Festival" }));
        });
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path(path("/settings/pricing/pricelists/3"))
                .json_body(json!({ "name": "Festival 2025" }));
            then.status(StatusCode::OK)
                .json_body(json!({ "id": 3, "name": "Festival 2025" }));
        });

        let data = CreatePriceList::builder()
            .name("Festival")
            .prices(
                PricelistPrices::builder()
                    .pricetypes(vec![
                        PricelistPrice::builder()
                            .pricetypeid(1)
                            .prices(vec![10.0])
                            .build(),
                    ])
                    .build(),
            )
            .build();
        let created = pricelists::create(&client, &data).await?;
        assert_eq!(created.id, Some(3));

        let data = UpdatePriceList::builder().name("Festival 2025").build();
        let updated = pricelists::update(&client, 3, &data).await?;
        assert_eq!(updated.name.as_deref(), Some("Festival 2025"));

        create.assert();
        update.assert();

        Ok(())
    }

    #[tokio::test]
    async fn delete_should_accept_empty_body() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path(path("/settings/pricing/pricelists/3"));
            then.status(StatusCode::OK);
        });

        pricelists::delete(&client, 3).await?;
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn batch_should_put_collection() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path(path("/settings/pricing/pricelists"))
                .json_body(json!([{ "id": 1, "name": "A" }, { "name": "B" }]));
            then.status(StatusCode::OK);
        });

        let data = [
            PriceList::builder().id(1).name("A").build(),
            PriceList::builder().name("B").build(),
        ];
        pricelists::batch(&client, &data).await?;
        mock.assert();

        Ok(())
    }
}

mod orderfees {
    use httpmock::{
        Method::{DELETE, GET, POST, PUT},
        MockServer,
    };
    use reqwest::StatusCode;
    use serde_json::json;
    use ticketmatic_client_sdk::error::Kind;
    use ticketmatic_client_sdk::settings::orderfees::{
        self,
        types::{
            CreateOrderFee, OrderFee, OrderFeeParameters, OrderFeeRule, OrderFeeType,
            UpdateOrderFee,
        },
    };

    use crate::common::{client, path};

    #[tokio::test]
    async fn get_list_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(path("/settings/ticketsales/orderfees"))
                .query_param("filter", "select id from tm.orderfee")
                .query_param_missing("includearchived")
                .query_param_missing("lastupdatesince");
            then.status(StatusCode::OK).json_body(json!([
                { "id": 1, "typeid": 2401, "name": "Manual fee" }
            ]));
        });

        let params = OrderFeeParameters::builder()
            .filter("select id from tm.orderfee")
            .build();
        let fees = orderfees::get_list(&client, &params).await?;

        assert_eq!(fees.len(), 1);
        assert_eq!(fees[0].typeid, Some(OrderFeeType::Manual));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn create_should_encode_type_as_code() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(path("/settings/ticketsales/orderfees"))
                .json_body(json!({
                    "typeid": 2402,
                    "name": "Service fee",
                    "rule": { "status": true, "value": 1.5 }
                }));
            then.status(StatusCode::OK).json_body(json!({
                "id": 4,
                "typeid": 2402,
                "name": "Service fee",
                "rule": { "status": true, "value": "1.5" }
            }));
        });

        let data = CreateOrderFee::builder()
            .typeid(OrderFeeType::Automatic)
            .name("Service fee")
            .rule(OrderFeeRule::builder().status(true).value(1.5).build())
            .build();
        let fee = orderfees::create(&client, &data).await?;

        assert_eq!(fee.id, Some(4));
        assert_eq!(fee.rule.and_then(|r| r.value), Some(1.5));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_should_be_not_found() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(path("/settings/ticketsales/orderfees/99"));
            then.status(StatusCode::NOT_FOUND)
                .json_body(json!({ "code": 404, "message": "Not found" }));
        });

        let err = orderfees::get(&client, 99).await.unwrap_err();

        assert_eq!(err.kind(), Kind::NotFound);
        let status = err.status_details().unwrap();
        assert_eq!(
            status.error.as_ref().and_then(|e| e.code.as_deref()),
            Some("404")
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn delete_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(DELETE)
                .path(path("/settings/ticketsales/orderfees/4"));
            then.status(StatusCode::OK).body("   ");
        });

        orderfees::delete(&client, 4).await?;
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn update_and_batch_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let update = server.mock(|when, then| {
            when.method(PUT)
                .path(path("/settings/ticketsales/orderfees/4"))
                .json_body(json!({ "rule": { "status": false } }));
            then.status(StatusCode::OK)
                .json_body(json!({ "id": 4, "rule": { "status": false } }));
        });
        let batch = server.mock(|when, then| {
            when.method(PUT)
                .path(path("/settings/ticketsales/orderfees"))
                .json_body(json!([{ "id": 4, "typeid": 2403 }]));
            then.status(StatusCode::NO_CONTENT);
        });

        let data = UpdateOrderFee::builder()
            .rule(OrderFeeRule::builder().status(false).build())
            .build();
        let fee = orderfees::update(&client, 4, &data).await?;
        assert_eq!(fee.rule.and_then(|r| r.status), Some(false));

        let data = [OrderFee::builder().id(4).typeid(OrderFeeType::Script).build()];
        orderfees::batch(&client, &data).await?;

        update.assert();
        batch.assert();

        Ok(())
    }
}

mod filterdefinitions {
    use httpmock::{
        Method::{DELETE, GET, POST, PUT},
        MockServer,
    };
    use reqwest::StatusCode;
    use serde_json::json;
    use ticketmatic_client_sdk::settings::filterdefinitions::{
        self,
        types::{
            CreateFilterDefinition, FilterDefinition, FilterDefinitionParameters,
            FilterDefinitionType, UpdateFilterDefinition,
        },
    };

    use crate::common::{client, path};

    #[tokio::test]
    async fn get_list_should_filter_by_type() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(path("/settings/system/filterdefinitions"))
                .query_param("typeid", "10002")
                .query_param_missing("filter")
                .query_param_missing("includearchived")
                .query_param_missing("lastupdatesince");
            then.status(StatusCode::OK).json_body(json!([
                { "id": 10, "typeid": 10002, "description": "Customer name", "filtertype": 1 }
            ]));
        });

        let params = FilterDefinitionParameters::builder()
            .typeid(FilterDefinitionType::Customer)
            .build();
        let definitions = filterdefinitions::get_list(&client, &params).await?;

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].typeid, Some(FilterDefinitionType::Customer));
        assert_eq!(definitions[0].description.as_deref(), Some("Customer name"));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn update_should_send_partial_body() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path(path("/settings/system/filterdefinitions/10"))
                .json_body(json!({ "sqlclause": "c.lastname ilike ${value}" }));
            then.status(StatusCode::OK).json_body(json!({
                "id": 10,
                "sqlclause": "c.lastname ilike ${value}"
            }));
        });

        let data = UpdateFilterDefinition::builder()
            .sqlclause("c.lastname ilike ${value}")
            .build();
        let definition = filterdefinitions::update(&client, 10, &data).await?;

        assert_eq!(
            definition,
            FilterDefinition::builder()
                .id(10)
                .sqlclause("c.lastname ilike ${value}")
                .build()
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn lifecycle_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = client(&server)?;

        let create = server.mock(|when, then| {
            when.method(POST)
                .path(path("/settings/system/filterdefinitions"))
                .json_body(json!({
                    "typeid": 10001,
                    "description": "Paid",
                    "sqlclause": "amountpaid > 0"
                }));
            then.status(StatusCode::OK).json_body(json!({
                "id": 11,
                "typeid": 10001,
                "description": "Paid",
                "sqlclause": "amountpaid > 0",
                "isarchived": false,
                "createdts": "2024-05-01 10:00:00"
            }));
        });
        let get = server.mock(|when, then| {
            when.method(GET)
                .path(path("/settings/system/filterdefinitions/11"));
            then.status(StatusCode::OK).json_body(json!({
                "id": 11,
                "typeid": 10001,
                "isarchived": true
            }));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE)
                .path(path("/settings/system/filterdefinitions/11"));
            then.status(StatusCode::OK);
        });
        let batch = server.mock(|when, then| {
            when.method(PUT)
                .path(path("/settings/system/filterdefinitions"))
                .json_body(json!([{ "id": 11, "description": "Paid orders" }]));
            then.status(StatusCode::OK);
        });

        let data = CreateFilterDefinition::builder()
            .typeid(FilterDefinitionType::Order)
            .description("Paid")
            .sqlclause("amountpaid > 0")
            .build();
        let created = filterdefinitions::create(&client, &data).await?;
        assert_eq!(created.id, Some(11));
        assert_eq!(created.isarchived, Some(false));

        let data = [FilterDefinition::builder().id(11).description("Paid orders").build()];
        filterdefinitions::batch(&client, &data).await?;

        filterdefinitions::delete(&client, 11).await?;

        let archived = filterdefinitions::get(&client, 11).await?;
        assert_eq!(archived.isarchived, Some(true));

        create.assert();
        batch.assert();
        delete.assert();
        get.assert();

        Ok(())
    }
}
