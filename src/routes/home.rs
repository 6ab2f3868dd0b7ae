// src/routes/home.rs

use axum::response::Html;
use chrono::Local;

use crate::config::VERSION;

pub async fn home() -> Html<String> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S");
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>webapp</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
        }}
        .container {{
            background: rgba(255, 255, 255, 0.1);
            padding: 30px;
            border-radius: 10px;
            backdrop-filter: blur(10px);
        }}
        h1 {{ margin-top: 0; }}
        .info {{ background: rgba(0,0,0,0.2); padding: 15px; border-radius: 5px; margin: 10px 0; }}
        .code {{ background: #2d3748; padding: 10px; border-radius: 5px; font-family: monospace; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>🎉 webapp</h1>
        <div class="info">
            <p><strong>Version:</strong> {VERSION}</p>
            <p><strong>Build Time:</strong> {now}</p>
            <p><strong>Status:</strong> ✅ Running Successfully!</p>
        </div>
        <h2>Available Endpoints:</h2>
        <div class="code">
            <p>GET / - This page</p>
            <p>GET /health - Health check</p>
            <p>GET /version - Application version</p>
        </div>
    </div>
</body>
</html>
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[tokio::test]
    async fn page_embeds_version_and_time() {
        let Html(body) = home().await;
        assert!(body.contains(VERSION));

        // The rendered time sits right after the Build Time label.
        let marker = "Build Time:</strong> ";
        let at = body.find(marker).unwrap() + marker.len();
        let stamp = &body[at..at + 19];
        NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").unwrap();
    }
}
