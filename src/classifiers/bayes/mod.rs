mod gaussian_naive_bayes;

pub use gaussian_naive_bayes::GaussianNaiveBayes;
