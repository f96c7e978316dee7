//! Render a saved `user_timeline.json` response into text segments.
//!
//! ```bash
//! cargo run --example render_tweets -- timeline.json
//! ```

use chirpsign_twitter::{TextSegment, Tweet};

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: render_tweets <timeline.json>"))?;
    let tweets: Vec<Tweet> = serde_json::from_slice(&std::fs::read(path)?)?;

    for tweet in tweets {
        println!("{} ({})", tweet.permalink(), tweet.created_time()?);
        for segment in tweet.segments()? {
            match segment {
                TextSegment::Plain { text } => print!("{text}"),
                TextSegment::Entity {
                    text, target_url, ..
                } => print!("[{text}]({target_url})"),
            }
        }
        println!("\n");
    }
    Ok(())
}
