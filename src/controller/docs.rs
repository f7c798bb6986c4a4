use actix_web::{get, web, Responder};
use serde_json::{json, Value};

use crate::error::Error;

/// OpenAPI description of the mortgage endpoints.
#[get("/docs")]
pub async fn index() -> Result<impl Responder, Error> {
    Ok(web::Json(document()))
}

fn document() -> Value {
    let plain_text = json!({
        "text/plain": { "schema": { "type": "string" } }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Mortgage API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/api/interest-rates": {
                "get": {
                    "summary": "Get all Mortgage Interest Rates",
                    "responses": {
                        "200": {
                            "description": "Get all Mortgage Interest Rates",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/MortgageRateResponse" }
                                    }
                                }
                            }
                        },
                        "500": { "description": "Internal Server Error!" }
                    }
                }
            },
            "/api/mortgage-check": {
                "post": {
                    "summary": "Create a Mortgage Check",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/MortgageRequest" }
                            }
                        }
                    },
                    "responses": {
                        "201": {
                            "description": "Mortgage check Created!",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/MortgageCheckResponse" }
                                }
                            }
                        },
                        "400": {
                            "description": "Annual income not enough for this loan, loan value higher than house value, or invalid request",
                            "content": plain_text.clone()
                        },
                        "404": {
                            "description": "Maturity Period Not Found!",
                            "content": plain_text
                        },
                        "500": { "description": "Internal Server Error!" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "MortgageRequest": {
                    "type": "object",
                    "required": ["income", "maturityPeriod", "loanValue", "homeValue"],
                    "properties": {
                        "income": { "type": "number", "exclusiveMinimum": true, "minimum": 0 },
                        "maturityPeriod": { "type": "integer", "minimum": 1 },
                        "loanValue": { "type": "number", "exclusiveMinimum": true, "minimum": 0 },
                        "homeValue": { "type": "number", "exclusiveMinimum": true, "minimum": 0 }
                    }
                },
                "MortgageCheckResponse": {
                    "type": "object",
                    "properties": {
                        "feasible": { "type": "boolean" },
                        "monthlyCosts": { "type": "number" }
                    }
                },
                "MortgageRateResponse": {
                    "type": "object",
                    "properties": {
                        "maturityPeriod": { "type": "integer" },
                        "interestRate": { "type": "number" },
                        "lastUpdate": { "type": "string", "format": "date-time" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_mortgage_paths() {
        let doc = document();
        assert!(doc["paths"]["/api/interest-rates"]["get"].is_object());

        let responses = &doc["paths"]["/api/mortgage-check"]["post"]["responses"];
        for code in ["201", "400", "404", "500"] {
            assert!(responses[code].is_object(), "missing {}", code);
        }
    }
}
