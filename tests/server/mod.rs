use actix_web::{App, HttpResponse, HttpServer, web};

const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Konut piyasasinda 2026 beklentileri ve firsatlar</title>
<meta name="description" content="2026 konut piyasasi beklentileri: faiz, kredi ve bolgesel fiyat hareketleri uzerinden alici ve satici icin hazirlanan kapsamli degerlendirme raporumuz.">
<meta name="keywords" content="konut, piyasa, faiz">
<meta property="og:description" content="Konut piyasasina dair kapsamli degerlendirme.">
</head>
<body>
<h2>Genel gorunum</h2>
<p>Konut piyasasi bu yil hareketli. Faiz oranlari dustu. Alici sayisi artti.</p>
<h2>Bolgesel fiyatlar</h2>
<ul><li>Marmara</li><li>Ege</li></ul>
<p>Fiyatlar bolgeden bolgeye degisiyor. Peki bu alicilar icin ne anlama geliyor?</p>
<a href="/rehber">Alici rehberi</a>
<img src="/grafik.png" alt="Fiyat grafigi">
</body>
</html>"#;

const BARE_HTML: &str = "<html><head></head><body><p>Kisa metin.</p></body></html>";

/// Starts an in-process server exposing score-testable pages on an
/// ephemeral port and returns its base URL.
pub async fn get_test_server_url() -> String {
    let http_server = HttpServer::new(|| {
        App::new()
            .route(
                "/article",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(ARTICLE_HTML)
                }),
            )
            .route(
                "/bare",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(BARE_HTML)
                }),
            )
            .route(
                "/missing",
                web::get().to(|| async { HttpResponse::NotFound().body("Not Found") }),
            )
    })
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test server");

    let addr = http_server
        .addrs()
        .first()
        .cloned()
        .expect("No address bound");
    let url = format!("http://{}", addr);

    let app_server = http_server.run();

    tokio::spawn(async move {
        if let Err(e) = app_server.await {
            eprintln!("Test server error: {}", e);
        }
    });

    url
}
