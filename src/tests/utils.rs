use crate::dataset::loader::load_from_reader;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub const FIXTURE_CSV: &str = "\
접수연도,자치구명,건물명,건물용도,건축년도구분,건물면적구분,층,물건금액
2024,강남구,래미안블레스티지,아파트,2010년대,30평대,12,15.0
2024,송파구,송파파크데일1단지,아파트,2010년대,30평대,3,9.8
2024,송파구,위례신도시송파푸르지오,아파트,2010년대,30평대,,8.0
2024,마포구,마포래미안푸르지오,아파트,2010년대,30평대,21,14.2
2024,강남구,역삼푸르지오시티,오피스텔,2010년대,10평 미만,9,2.1
2024,송파구,헬리오시티,아파트,2010년대,30평대,30,25.0
";

/// State over the fixture listings above.
pub fn fixture_state() -> AppState {
    let dataset = load_from_reader(FIXTURE_CSV.as_bytes())
        .unwrap_or_else(|e| panic!("fixture failed to load: {e}"));
    AppState::new(dataset)
}

/// GET `path` with `pairs` as a percent-encoded query string.
pub fn get(path: &str, pairs: &[(&str, &str)]) -> Request {
    let mut uri = path.to_string();
    if !pairs.is_empty() {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        uri.push('?');
        uri.push_str(&query);
    }

    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// Runs `req` through the router and returns status and body.
pub fn request(state: &AppState, req: Request) -> (u16, String) {
    let mut resp = handle(req, state).unwrap();
    let status = resp.status().as_u16();
    (status, body_string(&mut resp))
}
