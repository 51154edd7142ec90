//! Blog writer that always uses the express model

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error>
{   bedrock_blog::lambda::run(bedrock_blog::Profile::Basic).await
}
