use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    sylva_lambda_zones::run().await
}
