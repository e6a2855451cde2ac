//! **HTTP**: adapter for the recommendation backend
//!
//! | Endpoint | Method | Port method |
//! |----------|--------|-------------|
//! | `/api/recommend` | POST | [`recommend`](millet_application::RecommendationGateway::recommend) |
//! | `/health` | GET | [`health`](millet_application::RecommendationGateway::health) |
//! | `/api/millets` | GET | [`list_millets`](millet_application::RecommendationGateway::list_millets) |

mod gateway;

pub use gateway::{DEFAULT_USER_AGENT, HttpRecommendationGateway};
