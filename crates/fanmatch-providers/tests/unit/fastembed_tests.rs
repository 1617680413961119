//! Tests for the FastEmbed provider

#[cfg(feature = "embedding-fastembed")]
mod enabled {
    use fanmatch_application::use_cases::cosine_similarity;
    use fanmatch_providers::EmbeddingProvider;
    use fanmatch_providers::embedding::FastEmbedProvider;

    #[test]
    #[ignore = "downloads model weights"]
    fn test_default_model_embeds_multilingual_text() {
        let provider = FastEmbedProvider::new().expect("model loads");

        let pt = provider.embed("Jogador agressivo que abre espaço").unwrap();
        let en = provider.embed("Aggressive player who opens space").unwrap();

        assert_eq!(pt.dimensions, 768);
        assert_eq!(provider.dimensions(), 768);
        assert!(cosine_similarity(&pt.vector, &en.vector) > 0.5);
    }

    #[test]
    fn test_unknown_model_is_rejected_before_download() {
        let result = FastEmbedProvider::from_model_name("word2vec", None, false);
        assert!(result.is_err());
    }
}
