use crate::config::environment::AppConfig;
use crate::service::rate_service::BASE_CURRENCY;
use serde_json::{Value, json};

pub const API_TITLE: &str = "Currency Conversion Rates";

/// OpenAPI 3.1 description of the public routes.
pub fn document(config: &AppConfig) -> Value {
    let detail_ref = json!({"$ref": "#/components/schemas/Detail Response"});
    let detail_content = json!({"application/json": {"schema": detail_ref}});

    json!({
        "openapi": "3.1.0",
        "info": {
            "title": API_TITLE,
            "version": env!("CARGO_PKG_VERSION"),
            "description": format!(
                "Daily reference rates published by the European Central Bank ({}).",
                config.rates_source_url
            ),
        },
        "paths": {
            "/token": {
                "post": {
                    "description": "Generates a JWT Token necessary to login to the API.",
                    "requestBody": {
                        "description": "User information",
                        "content": {
                            "application/json": {
                                "schema": {"$ref": "#/components/schemas/User"}
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Returns the generated JWT Token.",
                            "content": detail_content,
                        },
                        "404": {
                            "description": "An error has ocurred while generating the Token, and the actual error message will be returned.",
                            "content": detail_content,
                        }
                    }
                }
            },
            "/currencies": {
                "get": {
                    "description": "Returns the current date's Currency Conversion Rates, from the Central European Bank API.",
                    "parameters": [
                        {
                            "in": "query",
                            "name": "amount",
                            "description": "The actual amount to convert",
                            "schema": {"type": "number", "format": "double", "default": 1}
                        },
                        {
                            "in": "query",
                            "name": "from",
                            "description": "The original Currency Iso Code",
                            "schema": {"type": "string", "default": BASE_CURRENCY}
                        },
                        {
                            "in": "query",
                            "name": "to",
                            "description": "Currency Iso Codes separated by commas. If empty, the amount is converted to every available currency.",
                            "schema": {"type": "string"},
                            "example": "USD,JPY,MXN"
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Currency Iso Codes and the converted amounts.",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/Currencies"}
                                }
                            }
                        },
                        "401": {
                            "description": "The Token is missing, invalid or expired.",
                            "content": detail_content,
                        },
                        "404": {
                            "description": "The request could not be processed.",
                            "content": detail_content,
                        }
                    },
                    "security": [{"bearerAuth": []}]
                }
            },
            "/currencies/{from}/{to}": {
                "get": {
                    "description": "Converts one unit of `from` into each code in `to` (all codes when omitted).",
                    "parameters": [
                        {"in": "path", "name": "from", "required": true, "schema": {"type": "string"}},
                        {"in": "path", "name": "to", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Currency Iso Codes and their conversion rates.",
                            "content": {
                                "application/json": {
                                    "schema": {"$ref": "#/components/schemas/Currencies"}
                                }
                            }
                        },
                        "404": {
                            "description": "The request could not be processed.",
                            "content": detail_content,
                        }
                    }
                }
            }
        },
        "components": {
            "securitySchemes": {
                "bearerAuth": {
                    "type": "http",
                    "scheme": "bearer",
                    "bearerFormat": "JWT"
                }
            },
            "schemas": {
                "Detail Response": {
                    "type": "object",
                    "properties": {
                        "detail": {
                            "type": "string",
                            "description": "The token, or the error message",
                            "example": "Return message"
                        }
                    }
                },
                "User": {
                    "type": "object",
                    "required": ["name", "surname"],
                    "properties": {
                        "name": {"type": "string", "example": "John"},
                        "surname": {"type": "string", "example": "Doe"}
                    }
                },
                "Currencies": {
                    "type": "object",
                    "description": "Currency Iso Codes mapped to converted amounts.",
                    "additionalProperties": {"type": "number", "format": "double"},
                    "example": {"USD": 1.0524, "JPY": 157.44, "MXN": 18.8786}
                }
            }
        }
    })
}
