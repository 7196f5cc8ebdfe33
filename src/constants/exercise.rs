use crate::models::domain::Level;

/// Identifies the exercise statement shown to students.
pub const QUESTION_ID: &str = "Q1";

pub const MAX_PROMPT_LENGTH: usize = 1500;

pub const QUESTION_TEXT: &str = "Crie uma aplicação simples para organizar atividades de estudo de uma disciplina.

Na tela da aplicação deve existir, pelo menos:
- Uma área onde serão mostradas as atividades de estudo (em forma de lista, tabela ou cartões);
- Um formulário com campos, por exemplo:
  - Nome da disciplina;
  - Nome ou descrição da atividade;
  - Dia da semana ou data;
  - Duração estimada em horas;
- Um botão (por exemplo, \"Adicionar atividade\") ligado a esse formulário.

O funcionamento esperado é o seguinte:
- A pessoa preenche o formulário e clica no botão;
- A aplicação pega essas informações e acrescenta uma nova atividade na área onde as atividades aparecem na tela;
- A página não deve ser recarregada a cada clique; as atividades vão surgindo uma embaixo da outra, à medida que são adicionadas;
- Deve ser possível repetir esse processo para cadastrar várias atividades.";

pub const LEVELS: [Level; 3] = [Level::A, Level::B, Level::C];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_listed_in_order() {
        let codes: Vec<&str> = LEVELS.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_question_text_mentions_the_form_and_button() {
        assert!(QUESTION_TEXT.contains("formulário"));
        assert!(QUESTION_TEXT.contains("Adicionar atividade"));
    }
}
