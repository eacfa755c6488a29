use thiserror::Error;

/// 어시스턴트 패널 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// 질문이 비어 있음
    #[error("please enter a question")]
    EmptyQuery,
    /// 설정에서 어시스턴트가 꺼져 있음
    #[error("assistant is disabled in the configuration")]
    Disabled,
}

/// 자유 질문에 한 번 응답하는 어시스턴트. 대화 상태를 유지하지 않는다.
pub trait Assistant {
    fn ask(&self, query: &str) -> Result<String, AssistantError>;
}

/// 외부 모델을 호출하지 않고 정해진 문장으로 답하는 오프라인 구현.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAssistant;

impl Assistant for PlaceholderAssistant {
    fn ask(&self, query: &str) -> Result<String, AssistantError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AssistantError::EmptyQuery);
        }
        Ok(format!(
            "🤖 AI says: '{query}' is an interesting question! Implement API for real responses."
        ))
    }
}

/// 설정으로 켜고 끌 수 있는 어시스턴트 래퍼.
#[derive(Debug, Clone, Copy)]
pub struct Gated<A> {
    inner: A,
    enabled: bool,
}

impl<A: Assistant> Gated<A> {
    pub fn new(inner: A, enabled: bool) -> Self {
        Self { inner, enabled }
    }
}

impl<A: Assistant> Assistant for Gated<A> {
    fn ask(&self, query: &str) -> Result<String, AssistantError> {
        if !self.enabled {
            return Err(AssistantError::Disabled);
        }
        self.inner.ask(query)
    }
}
