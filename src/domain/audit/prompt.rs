//! Auditor prompt and response schema.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use super::{AuditCategory, AuditRequest};

pub const CATEGORY_FIELD: &str = "category";
pub const ROI_ESTIMATE_FIELD: &str = "roiEstimate";
pub const REASONING_FIELD: &str = "reasoning";
pub const RECOMMENDATION_FIELD: &str = "recommendation";

/// Fields every diagnostic must carry, in schema order.
pub const REQUIRED_FIELDS: [&str; 4] = [
    CATEGORY_FIELD,
    ROI_ESTIMATE_FIELD,
    REASONING_FIELD,
    RECOMMENDATION_FIELD,
];

static RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    let categories: Vec<&str> = AuditCategory::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "type": "object",
        "properties": {
            CATEGORY_FIELD: { "type": "string", "enum": categories },
            ROI_ESTIMATE_FIELD: { "type": "string" },
            REASONING_FIELD: { "type": "string" },
            RECOMMENDATION_FIELD: { "type": "string" }
        },
        "required": REQUIRED_FIELDS,
        "additionalProperties": false
    })
});

/// JSON Schema the model's answer must conform to.
///
/// Written in standard JSON Schema; provider adapters translate it into
/// their own structured-output dialect.
pub fn response_schema() -> &'static Value {
    &RESPONSE_SCHEMA
}

/// Builds the instruction prompt for a senior AI-strategy auditor.
pub fn build_prompt(request: &AuditRequest) -> String {
    format!(
        "Actúa como un Auditor Senior de Estrategia de IA Corporativa. \
Evalúa la siguiente iniciativa: \"{use_case}\"\n\
\n\
Criterios de evaluación:\n\
1. Impacto EBITDA: ¿genera ahorro real o aumento de ingresos?\n\
2. Soberanía técnica: ¿crea un activo propio o es un gasto recurrente en herramientas de terceros?\n\
3. Integración operativa: ¿se conecta con procesos core o es una isla táctica?\n\
\n\
Responde únicamente con un objeto JSON con estos campos:\n\
- {category}: '{value}' (inversión estratégica con retorno) o '{leakage}' (gasto táctico con retorno nulo o negativo).\n\
- {roi}: término técnico de impacto en MAYÚSCULAS_CON_GUIONES (ej: \"DILUCIÓN_DE_CAPITAL\", \"RETORNO_A_6_MESES\", \"PASIVO_OPERATIVO\").\n\
- {reasoning}: análisis breve de la clasificación, centrado en el presupuesto.\n\
- {recommendation}: siguiente paso para optimizar la inversión.\n",
        use_case = request.use_case(),
        category = CATEGORY_FIELD,
        value = AuditCategory::Value,
        leakage = AuditCategory::Leakage,
        roi = ROI_ESTIMATE_FIELD,
        reasoning = REASONING_FIELD,
        recommendation = RECOMMENDATION_FIELD,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_use_case() {
        let request = AuditRequest::new("Chatbot de soporte con GPT").unwrap();
        let prompt = build_prompt(&request);
        assert!(prompt.contains("\"Chatbot de soporte con GPT\""));
    }

    #[test]
    fn prompt_names_criteria_and_fields() {
        let request = AuditRequest::new("Predicción de demanda").unwrap();
        let prompt = build_prompt(&request);

        assert!(prompt.contains("Impacto EBITDA"));
        assert!(prompt.contains("Soberanía técnica"));
        assert!(prompt.contains("Integración operativa"));
        for field in REQUIRED_FIELDS {
            assert!(prompt.contains(field), "prompt is missing {}", field);
        }
        assert!(prompt.contains("'VALUE'"));
        assert!(prompt.contains("'LEAKAGE'"));
    }

    #[test]
    fn schema_requires_all_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(
            schema["required"],
            json!(["category", "roiEstimate", "reasoning", "recommendation"])
        );
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn schema_constrains_category() {
        let schema = response_schema();
        assert_eq!(
            schema["properties"]["category"]["enum"],
            json!(["VALUE", "LEAKAGE"])
        );
        for field in REQUIRED_FIELDS {
            assert_eq!(schema["properties"][field]["type"], "string");
        }
    }
}
