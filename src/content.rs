//! Static page content. Everything here is built once at startup and never
//! mutated afterwards.

use crate::types::{Experience, Project, SkillGroup};

pub const OWNER_NAME: &str = "Jithin Raj";
pub const TAGLINE: &str =
    "Transforming data into intelligent solutions. Specializing in deep learning, \
     computer vision, and MLOps.";
pub const ABOUT_BLURB: &str =
    "Passionate ML engineer with 5+ years of experience building production-ready \
     machine learning systems. I specialize in computer vision, NLP, and MLOps, \
     with a track record of delivering impactful solutions.";

pub const CONTACT_EMAIL: &str = "your.email@example.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/yourprofile";
pub const GITHUB_URL: &str = "https://github.com/yourusername";

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Computer Vision for Medical Imaging".to_string(),
            description: "Deep learning model for automated detection of anomalies in \
                          medical scans using CNN architectures. Achieved 94% accuracy \
                          on validation set."
                .to_string(),
            tech: vec![
                "PyTorch".to_string(),
                "OpenCV".to_string(),
                "Docker".to_string(),
                "FastAPI".to_string(),
            ],
            github: "https://github.com/username/medical-cv".to_string(),
            demo: "https://demo.medical-cv.com".to_string(),
            image: "https://via.placeholder.com/400x200/4f46e5/ffffff?text=Medical+CV"
                .to_string(),
        },
        Project {
            title: "NLP Sentiment Analysis Pipeline".to_string(),
            description: "End-to-end pipeline for real-time sentiment analysis of social \
                          media data with 92% accuracy using transformer models."
                .to_string(),
            tech: vec![
                "HuggingFace".to_string(),
                "Apache Kafka".to_string(),
                "PostgreSQL".to_string(),
                "React".to_string(),
            ],
            github: "https://github.com/username/sentiment-pipeline".to_string(),
            demo: "https://sentiment-demo.com".to_string(),
            image: "https://via.placeholder.com/400x200/059669/ffffff?text=NLP+Pipeline"
                .to_string(),
        },
        Project {
            title: "MLOps Deployment Platform".to_string(),
            description: "Automated ML model deployment system with monitoring, A/B \
                          testing, and rollback capabilities using Kubernetes and MLflow."
                .to_string(),
            tech: vec![
                "Kubernetes".to_string(),
                "MLflow".to_string(),
                "Prometheus".to_string(),
                "Grafana".to_string(),
            ],
            github: "https://github.com/username/mlops-platform".to_string(),
            demo: "https://mlops-demo.com".to_string(),
            image: "https://via.placeholder.com/400x200/dc2626/ffffff?text=MLOps+Platform"
                .to_string(),
        },
    ]
}

pub fn skill_groups() -> Vec<SkillGroup> {
    let group = |category: &str, items: &[&str]| SkillGroup {
        category: category.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        group(
            "Machine Learning",
            &["PyTorch", "TensorFlow", "Scikit-learn", "XGBoost", "Keras"],
        ),
        group(
            "Deep Learning",
            &["CNN", "RNN/LSTM", "Transformers", "GANs", "Reinforcement Learning"],
        ),
        group(
            "Data Engineering",
            &["Apache Spark", "Kafka", "Airflow", "PostgreSQL", "MongoDB"],
        ),
        group(
            "Cloud & DevOps",
            &["AWS", "Docker", "Kubernetes", "CI/CD", "Terraform"],
        ),
        group(
            "Programming",
            &["Python", "R", "SQL", "JavaScript", "Go", "TypeScript"],
        ),
    ]
}

pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            title: "Senior ML Engineer".to_string(),
            company: "TechCorp AI".to_string(),
            period: "2022 - Present".to_string(),
            description: "Led development of production ML systems serving 10M+ users. \
                          Improved model performance by 35% through advanced feature \
                          engineering and ensemble methods."
                .to_string(),
        },
        Experience {
            title: "Data Scientist".to_string(),
            company: "DataDriven Inc".to_string(),
            period: "2020 - 2022".to_string(),
            description: "Built predictive models for customer churn, increasing \
                          retention by 28%. Designed and implemented A/B testing \
                          framework for model validation."
                .to_string(),
        },
        Experience {
            title: "ML Research Intern".to_string(),
            company: "AI Research Lab".to_string(),
            period: "2019 - 2020".to_string(),
            description: "Conducted research on computer vision applications in \
                          healthcare. Published 2 papers at top-tier conferences \
                          (CVPR, NeurIPS)."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        assert_eq!(projects().len(), 3);
        assert_eq!(skill_groups().len(), 5);
        assert_eq!(experience().len(), 3);
    }

    #[test]
    fn test_project_links_are_absolute() {
        for project in projects() {
            assert!(project.github.starts_with("https://"), "{}", project.title);
            assert!(project.demo.starts_with("https://"), "{}", project.title);
            assert!(!project.tech.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn test_skill_groups_are_nonempty() {
        for group in skill_groups() {
            assert!(!group.items.is_empty(), "{}", group.category);
        }
    }
}
