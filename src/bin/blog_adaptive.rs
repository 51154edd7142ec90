//! Blog writer that picks its model by topic complexity

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error>
{   bedrock_blog::lambda::run(bedrock_blog::Profile::Adaptive).await
}
