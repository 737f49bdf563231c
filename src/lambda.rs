use journal_relay::utils::logger;
use journal_relay::utils::validation::Validate;
use journal_relay::{EntryTranslator, InboundRequest, InboundResponse, NotionClient, RelayConfig};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(
    translator: &EntryTranslator<NotionClient>,
    event: LambdaEvent<InboundRequest>,
) -> Result<InboundResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        method = %event.payload.http_method,
        "Handling journal submission"
    );

    Ok(translator.handle(&event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 설정은 콜드 스타트 때 한 번만 읽는다
    let config = RelayConfig::from_env();
    config.validate()?;

    let translator = EntryTranslator::from_config(config);
    let translator = &translator;

    run(service_fn(move |event: LambdaEvent<InboundRequest>| async move {
        function_handler(translator, event).await
    }))
    .await
}
