use std::thread;

use cardtint::{
    color::SequenceChannels,
    page::{self, Host},
    preview::{PreviewPage, PreviewServer},
};

fn loaded_page() -> PreviewPage {
    let mut host = Host::new(PreviewPage::from_labels("Fonts", "card", ["Noto Sans"]));
    let mut source = SequenceChannels::new([10, 80, 250]).unwrap();
    host.on_content_loaded(move |doc| {
        page::init_cards(doc, "card", &mut source);
    });
    host.finish_loading();
    host.into_document()
}

#[test]
fn test_serves_loaded_page_then_rejects_other_requests() {
    let page = loaded_page();
    let server = PreviewServer::bind(&page, 0).unwrap();
    let base = format!("http://{}", server.local_addr().unwrap());

    let handle = thread::spawn(move || {
        for _ in 0..3 {
            server.serve_one().unwrap();
        }
    });

    let response = ureq::get(&format!("{base}/")).call().unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.content_type().starts_with("text/html"));
    let body = response.into_string().unwrap();
    assert_eq!(body, page.render());
    assert!(body.contains("background-color: #5550fa;"));

    match ureq::get(&format!("{base}/missing")).call() {
        Err(ureq::Error::Status(code, _)) => assert_eq!(code, 404),
        other => panic!("expected 404, got {other:?}"),
    }
    match ureq::post(&format!("{base}/")).call() {
        Err(ureq::Error::Status(code, _)) => assert_eq!(code, 405),
        other => panic!("expected 405, got {other:?}"),
    }

    handle.join().unwrap();
}
