use contracts::domain::a002_customer::aggregate::Customer;
use contracts::shared::lenient::SkipInvalid;

use crate::shared::api_utils::ApiClient;

/// GET /api/customers
pub async fn fetch_customers(api: &ApiClient) -> Result<Vec<Customer>, String> {
    api.get_json::<SkipInvalid<Customer>>("/api/customers")
        .await
        .map(SkipInvalid::into_inner)
}
