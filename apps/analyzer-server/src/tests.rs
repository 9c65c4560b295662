//! HTTP endpoint tests for the analyzer server

#[cfg(test)]
mod endpoint_tests {
    //! HTTP endpoint integration tests using axum-test

    use std::io::{Cursor, Write};
    use std::sync::Arc;
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use clause_engine::ClauseEngine;
    use doc_text::{ExtractError, OcrEngine, TextExtractor};
    use pretty_assertions::assert_eq;

    use crate::api::AnalyzeResponse;
    use crate::error::UNREADABLE_DETAIL;
    use crate::{build_router, AppState};

    const CONTRACT: &str = "Staffing Agreement.\n\
        Payment terms are Net 45 days from invoice date.\n\
        This Notice of Assignment directs all payments to Rev Capital.\n\
        Client shall not solicit Agency employees (non-solicit).\n\
        Temp-to-perm conversion requires a fee.\n\
        Contractor shall indemnify Client against all claims.\n";

    /// OCR stand-in that "reads" every scanned PDF as the same text
    struct CannedOcr(&'static str);

    impl OcrEngine for CannedOcr {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn recognize_pdf(&self, _pdf: &[u8], _max_pages: u32) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    /// OCR that outlives any reasonable deadline
    struct SlowOcr(Duration);

    impl OcrEngine for SlowOcr {
        fn name(&self) -> &'static str {
            "slow"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn recognize_pdf(&self, _pdf: &[u8], _max_pages: u32) -> Result<String, ExtractError> {
            std::thread::sleep(self.0);
            Ok("Payment: Net 15".to_string())
        }
    }

    /// OCR whose decoder crashes
    struct PanickingOcr;

    impl OcrEngine for PanickingOcr {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn recognize_pdf(&self, _pdf: &[u8], _max_pages: u32) -> Result<String, ExtractError> {
            panic!("rasterizer crashed");
        }
    }

    fn server_with(extractor: TextExtractor, timeout_ms: u64) -> TestServer {
        let state = AppState::new(ClauseEngine::new(), extractor, timeout_ms, 2);
        TestServer::new(build_router(state, 1024 * 1024)).unwrap()
    }

    fn create_test_server() -> TestServer {
        server_with(TextExtractor::without_ocr(), 10_000)
    }

    fn upload(filename: &str, data: Vec<u8>) -> MultipartForm {
        MultipartForm::new().add_part("file", Part::bytes(data).file_name(filename))
    }

    fn docx(paragraphs: &[&str]) -> Vec<u8> {
        docx_with_footer(paragraphs, None)
    }

    fn docx_with_footer(paragraphs: &[&str], footer: Option<&str>) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        let xml = format!("<w:document><w:body>{}</w:body></w:document>", body);

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        if let Some(footer) = footer {
            writer
                .start_file("word/footer1.xml", zip::write::FileOptions::default())
                .unwrap();
            let xml = format!("<w:ftr><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:ftr>", footer);
            writer.write_all(xml.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[tokio::test]
    async fn test_health_returns_200() {
        let server = create_test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "analyzer-server");
        assert_eq!(json["ocr"], "unavailable");
    }

    #[tokio::test]
    async fn test_analyze_txt_upload() {
        let server = create_test_server();
        let response = server
            .post("/analyze")
            .multipart(upload("contract.txt", CONTRACT.as_bytes().to_vec()))
            .await;
        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["ok"], true);
        assert_eq!(json["lights"].as_array().unwrap().len(), 6);
        assert_eq!(json["cards"].as_array().unwrap().len(), 5);

        assert_eq!(json["lights"][0]["label"], "Payment Terms");
        assert_eq!(json["lights"][0]["status"], "warn");
        assert_eq!(json["lights"][0]["note"], "(45 days)");
        assert_eq!(json["lights"][1]["label"], "NOA to Rev Capital");
        assert_eq!(json["lights"][1]["status"], "pass");
        assert_eq!(json["lights"][2]["status"], "pass");
        assert_eq!(json["lights"][3]["status"], "pass");
        assert_eq!(json["lights"][4]["status"], "fail");
        assert_eq!(json["lights"][4]["note"], "(one-sided)");
        assert_eq!(json["lights"][5]["label"], "Insurance");
        assert_eq!(json["lights"][5]["status"], "warn");

        assert_eq!(json["cards"][0]["body"], "Reason: Terms — 45 days");
        assert_eq!(json["cards"][4]["body"], "One-sided (client-favored)");
    }

    #[tokio::test]
    async fn test_analyze_docx_upload() {
        let server = create_test_server();
        let data = docx(&[
            "Invoices are due within 30 days of receipt.",
            "Each party shall indemnify the other.",
        ]);
        let response = server
            .post("/analyze")
            .multipart(upload("MSA.docx", data))
            .await;
        response.assert_status_ok();

        let body = response.json::<AnalyzeResponse>();
        assert!(body.ok);
        assert_eq!(body.lights[0].note, "(30 days)");
        assert_eq!(body.cards[4].body, "Mutual");
    }

    #[tokio::test]
    async fn test_docx_footer_assignment_notice() {
        let server = create_test_server();
        let data = docx_with_footer(
            &["Payment Net 30"],
            Some("Notice of Assignment: remit to Rev Capital"),
        );
        let response = server
            .post("/analyze")
            .multipart(upload("MSA.docx", data))
            .await;
        response.assert_status_ok();

        let body = response.json::<AnalyzeResponse>();
        assert_eq!(body.lights[0].note, "(30 days)");
        assert_eq!(body.lights[1].label, "NOA to Rev Capital");
        assert_eq!(body.lights[1].status, shared_types::LightStatus::Pass);
    }

    #[tokio::test]
    async fn test_blank_document_is_422() {
        let server = create_test_server();
        let response = server
            .post("/analyze")
            .multipart(upload("blank.txt", b"  \n\t \n".to_vec()))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["detail"], UNREADABLE_DETAIL);
    }

    #[tokio::test]
    async fn test_scanned_pdf_without_ocr_is_422() {
        let server = create_test_server();
        let response = server
            .post("/analyze")
            .multipart(upload("scan.pdf", b"not really a pdf".to_vec()))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_scanned_pdf_uses_injected_ocr() {
        let extractor = TextExtractor::new(Arc::new(CannedOcr("Payment: Net 15")));
        let server = server_with(extractor, 10_000);
        let response = server
            .post("/analyze")
            .multipart(upload("scan.pdf", b"not really a pdf".to_vec()))
            .await;
        response.assert_status_ok();

        let body = response.json::<AnalyzeResponse>();
        assert_eq!(body.lights[0].note, "(15 days)");
        assert_eq!(body.lights[0].status, shared_types::LightStatus::Pass);
    }

    #[tokio::test]
    async fn test_deadline_expiry_is_422() {
        let slow = SlowOcr(Duration::from_millis(500));
        let server = server_with(TextExtractor::new(Arc::new(slow)), 50);
        let response = server
            .post("/analyze")
            .multipart(upload("scan.pdf", b"not really a pdf".to_vec()))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["detail"], UNREADABLE_DETAIL);
    }

    #[tokio::test]
    async fn test_panicking_extraction_is_422() {
        let server = server_with(TextExtractor::new(Arc::new(PanickingOcr)), 10_000);
        let response = server
            .post("/analyze")
            .multipart(upload("scan.pdf", b"not really a pdf".to_vec()))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["detail"], UNREADABLE_DETAIL);

        // The worker permit came back; the server still answers
        let response = server
            .post("/analyze")
            .multipart(upload("contract.txt", CONTRACT.as_bytes().to_vec()))
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_queue_wait_does_not_count_against_deadline() {
        let state = AppState::new(ClauseEngine::new(), TextExtractor::without_ocr(), 50, 1);
        let busy = state.extract_permits.clone().acquire_owned().await.unwrap();
        let server = TestServer::new(build_router(state, 1024 * 1024)).unwrap();

        let request = async {
            server
                .post("/analyze")
                .multipart(upload("contract.txt", CONTRACT.as_bytes().to_vec()))
                .await
        };
        let release = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            drop(busy);
        };
        let (response, ()) = tokio::join!(request, release);

        response.assert_status_ok();
        let body = response.json::<AnalyzeResponse>();
        assert_eq!(body.lights[0].note, "(45 days)");
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_422() {
        let server = create_test_server();
        let response = server
            .post("/analyze")
            .multipart(upload("broken.docx", b"PK but not a zip".to_vec()))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_file_field_is_400() {
        let server = create_test_server();
        let form = MultipartForm::new().add_text("note", "no file here");
        let response = server.post("/analyze").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let state = AppState::new(ClauseEngine::new(), TextExtractor::without_ocr(), 10_000, 1);
        let server = TestServer::new(build_router(state, 64)).unwrap();
        let response = server
            .post("/analyze")
            .multipart(upload("big.txt", CONTRACT.repeat(10).into_bytes()))
            .await;
        assert!(response.status_code().is_client_error());
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use clause_engine::ClauseEngine;
    use shared_types::LightStatus;

    proptest! {
        /// Property: any readable text produces the full six-light report
        #[test]
        fn report_shape_is_fixed(text in "[A-Za-z0-9 .,()\\-]{1,300}") {
            let engine = ClauseEngine::new();
            if let Ok(result) = engine.analyze_raw(&text) {
                let report = engine.report(&result);
                prop_assert_eq!(report.lights.len(), 6);
                prop_assert_eq!(report.cards.len(), 5);
                prop_assert_eq!(report.lights[5].status, LightStatus::Warn);
            }
        }

        /// Property: payment-term status follows the 30/60 day thresholds
        #[test]
        fn payment_status_thresholds(days in 5u32..=365) {
            let engine = ClauseEngine::new();
            let result = engine.analyze_raw(&format!("Invoices payable Net {} days.", days)).unwrap();
            let status = engine.report(&result).lights[0].status;
            let expected = if days <= 30 {
                LightStatus::Pass
            } else if days <= 60 {
                LightStatus::Warn
            } else {
                LightStatus::Fail
            };
            prop_assert_eq!(status, expected);
        }
    }
}
