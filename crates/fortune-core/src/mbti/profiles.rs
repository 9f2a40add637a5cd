//! Static reference profiles for the sixteen MBTI types.

use crate::models::{MbtiProfile, MbtiType};

/// Profiles in [`MbtiType::ALL`] order.
pub static MBTI_PROFILES: [MbtiProfile; 16] = [
    MbtiProfile {
        mbti_type: MbtiType::Intj,
        name: "建築家",
        description: "戦略的思考者で、長期的なビジョンを持ち、独立心が強い",
        strengths: &["戦略的思考", "独立性", "決断力", "論理的思考"],
        weaknesses: &["完璧主義", "感情表現が苦手", "批判的", "孤立しがち"],
        work_style: "計画を立てて実行する。一人で集中して作業することを好む",
        communication: "直接的で論理的。感情よりも事実を重視",
        stress_factors: &["不確実性", "無計画な変更", "感情的な対立"],
        motivation_factors: &["知的挑戦", "独立性", "長期的目標達成"],
        team_role: "戦略立案者・分析者",
        management_style: "明確な目標設定と論理的な説明を好む",
    },
    MbtiProfile {
        mbti_type: MbtiType::Intp,
        name: "論理学者",
        description: "理論的で好奇心旺盛。新しいアイデアを探求することを好む",
        strengths: &["論理的思考", "創造性", "柔軟性", "客観性"],
        weaknesses: &["実務が苦手", "感情に鈍感", "決断が遅い", "細部を軽視"],
        work_style: "自由な環境で理論を探求。締切に弱い",
        communication: "理論的で詳細。感情的な話題は避ける傾向",
        stress_factors: &["過度の管理", "感情的な圧力", "ルーチンワーク"],
        motivation_factors: &["知的探求", "自由な環境", "革新的なアイデア"],
        team_role: "イノベーター・問題解決者",
        management_style: "自由な環境と論理的な説明を提供",
    },
    MbtiProfile {
        mbti_type: MbtiType::Entj,
        name: "指揮官",
        description: "リーダーシップがあり、効率を重視し、目標達成に集中する",
        strengths: &["リーダーシップ", "決断力", "効率性", "戦略的思考"],
        weaknesses: &["感情的でない", "短気", "批判的", "他人の感情を軽視"],
        work_style: "目標指向で効率的。チームを率いて成果を出す",
        communication: "直接的で命令的。感情よりも結果を重視",
        stress_factors: &["非効率", "無能なチーム", "目標の不明確さ"],
        motivation_factors: &["権力", "成功", "挑戦", "成果"],
        team_role: "リーダー・意思決定者",
        management_style: "明確な目標と成果評価を重視。権限委譲を好む",
    },
    MbtiProfile {
        mbti_type: MbtiType::Entp,
        name: "討論者",
        description: "創造的で機知に富み、新しい可能性を探求する",
        strengths: &["創造性", "適応力", "コミュニケーション", "戦略的思考"],
        weaknesses: &["ルーチンが苦手", "細部を軽視", "感情に鈍感", "決断が遅い"],
        work_style: "多様なプロジェクトを並行。変化を好む",
        communication: "エネルギッシュで論理的。議論を楽しむ",
        stress_factors: &["ルーチンワーク", "過度の管理", "感情的な対立"],
        motivation_factors: &["挑戦", "自由", "創造性", "知的刺激"],
        team_role: "イノベーター・交渉者",
        management_style: "自由と挑戦を提供。創造的な環境を整える",
    },
    MbtiProfile {
        mbti_type: MbtiType::Infj,
        name: "提唱者",
        description: "理想主義者で、他者を理解し、深い洞察力を持つ",
        strengths: &["洞察力", "共感力", "創造性", "決断力"],
        weaknesses: &["完璧主義", "批判に敏感", "孤立しがち", "燃え尽きやすい"],
        work_style: "意味のある仕事に集中。一人で深く考える",
        communication: "共感的で深い。非言語的コミュニケーションに敏感",
        stress_factors: &["無意味な仕事", "対立", "過度の社交"],
        motivation_factors: &["意味のある仕事", "成長", "他者への貢献"],
        team_role: "カウンセラー・ビジョナリー",
        management_style: "意味と目的を提供。個人的な成長を支援",
    },
    MbtiProfile {
        mbti_type: MbtiType::Infp,
        name: "仲介者",
        description: "理想主義者で、創造的で、価値観を重視する",
        strengths: &["創造性", "共感力", "柔軟性", "価値観の重視"],
        weaknesses: &["批判に敏感", "決断が遅い", "実務が苦手", "燃え尽きやすい"],
        work_style: "価値観に合う仕事に情熱を注ぐ。柔軟な環境を好む",
        communication: "温かく個人的。感情を大切にする",
        stress_factors: &["価値観の衝突", "過度の批判", "ルーチンワーク"],
        motivation_factors: &["意味のある仕事", "創造性", "個人的な成長"],
        team_role: "創造者・価値観の守護者",
        management_style: "価値観を尊重し、創造的な環境を提供",
    },
    MbtiProfile {
        mbti_type: MbtiType::Enfj,
        name: "主人公",
        description: "カリスマ的で、他者の成長を支援し、調和を重視する",
        strengths: &["リーダーシップ", "共感力", "コミュニケーション", "組織力"],
        weaknesses: &["批判に敏感", "燃え尽きやすい", "決断が遅い", "過度に理想主義"],
        work_style: "チームの成長を支援。調和を重視",
        communication: "温かく説得力がある。他者の感情に敏感",
        stress_factors: &["対立", "無視", "無意味な仕事"],
        motivation_factors: &["他者の成長", "調和", "意味のある仕事"],
        team_role: "メンター・組織者",
        management_style: "チームの調和と成長を重視。個人的な関係を築く",
    },
    MbtiProfile {
        mbti_type: MbtiType::Enfp,
        name: "運動家",
        description: "エネルギッシュで創造的、可能性を探求する",
        strengths: &["創造性", "コミュニケーション", "熱意", "柔軟性"],
        weaknesses: &["ルーチンが苦手", "細部を軽視", "決断が遅い", "燃え尽きやすい"],
        work_style: "多様なプロジェクトに情熱を注ぐ。変化を好む",
        communication: "エネルギッシュで楽観的。感情を大切にする",
        stress_factors: &["ルーチンワーク", "過度の管理", "批判"],
        motivation_factors: &["創造性", "自由", "意味のある仕事", "他者とのつながり"],
        team_role: "イノベーター・モチベーター",
        management_style: "創造性と自由を提供。楽観的な環境を整える",
    },
    MbtiProfile {
        mbti_type: MbtiType::Istj,
        name: "管理者",
        description: "実務的で責任感が強く、秩序を重視する",
        strengths: &["責任感", "組織力", "実務能力", "信頼性"],
        weaknesses: &["柔軟性に欠ける", "変化を嫌う", "感情表現が苦手", "批判的"],
        work_style: "計画を立てて実行。秩序と効率を重視",
        communication: "直接的で事実重視。感情よりも論理",
        stress_factors: &["不確実性", "急な変更", "無秩序"],
        motivation_factors: &["安定", "成果", "責任", "秩序"],
        team_role: "実務者・組織者",
        management_style: "明確な指示と安定した環境を提供",
    },
    MbtiProfile {
        mbti_type: MbtiType::Isfj,
        name: "擁護者",
        description: "思いやりがあり、責任感が強く、伝統を重視する",
        strengths: &["思いやり", "責任感", "実務能力", "協調性"],
        weaknesses: &["自己主張が弱い", "変化を嫌う", "批判に敏感", "燃え尽きやすい"],
        work_style: "他者を支援。安定した環境を好む",
        communication: "温かく配慮深い。他者の感情に敏感",
        stress_factors: &["対立", "過度の変化", "無視"],
        motivation_factors: &["他者への貢献", "安定", "認められること"],
        team_role: "サポーター・実務者",
        management_style: "感謝と安定を提供。個人的な関係を築く",
    },
    MbtiProfile {
        mbti_type: MbtiType::Estj,
        name: "幹部",
        description: "実務的で決断力があり、組織を率いる",
        strengths: &["リーダーシップ", "決断力", "組織力", "実務能力"],
        weaknesses: &["柔軟性に欠ける", "感情に鈍感", "批判的", "変化を嫌う"],
        work_style: "効率的に組織を運営。結果を重視",
        communication: "直接的で命令的。事実と結果を重視",
        stress_factors: &["非効率", "無秩序", "感情的な対立"],
        motivation_factors: &["成果", "権力", "秩序", "成功"],
        team_role: "リーダー・組織者",
        management_style: "明確な目標と効率を重視。結果で評価",
    },
    MbtiProfile {
        mbti_type: MbtiType::Esfj,
        name: "領事官",
        description: "協調性があり、他者を支援し、調和を重視する",
        strengths: &["協調性", "組織力", "思いやり", "実務能力"],
        weaknesses: &["批判に敏感", "変化を嫌う", "自己主張が弱い", "燃え尽きやすい"],
        work_style: "チームの調和を重視。他者を支援",
        communication: "温かく社交的。他者の感情に敏感",
        stress_factors: &["対立", "無視", "過度の変化"],
        motivation_factors: &["他者への貢献", "調和", "認められること"],
        team_role: "サポーター・組織者",
        management_style: "調和と感謝を提供。チームの結束を重視",
    },
    MbtiProfile {
        mbti_type: MbtiType::Istp,
        name: "巨匠",
        description: "実用的で独立心が強く、問題解決を好む",
        strengths: &["実務能力", "問題解決", "独立性", "適応力"],
        weaknesses: &["感情表現が苦手", "計画が苦手", "孤立しがち", "感情に鈍感"],
        work_style: "実践的な問題を解決。自由な環境を好む",
        communication: "簡潔で直接的。感情よりも事実",
        stress_factors: &["過度の管理", "感情的な圧力", "ルーチンワーク"],
        motivation_factors: &["自由", "挑戦", "実践的な問題解決"],
        team_role: "問題解決者・実務者",
        management_style: "自由と実践的な挑戦を提供",
    },
    MbtiProfile {
        mbti_type: MbtiType::Isfp,
        name: "冒険家",
        description: "柔軟で創造的、現在を大切にする",
        strengths: &["創造性", "柔軟性", "実務能力", "共感力"],
        weaknesses: &["計画が苦手", "批判に敏感", "自己主張が弱い", "決断が遅い"],
        work_style: "創造的な仕事に情熱。柔軟な環境を好む",
        communication: "温かく個人的。感情を大切にする",
        stress_factors: &["過度の管理", "批判", "対立"],
        motivation_factors: &["創造性", "自由", "意味のある仕事"],
        team_role: "創造者・実務者",
        management_style: "創造性と自由を提供。個人的な関係を築く",
    },
    MbtiProfile {
        mbti_type: MbtiType::Estp,
        name: "起業家",
        description: "エネルギッシュで実用的、行動力がある",
        strengths: &["行動力", "適応力", "実務能力", "コミュニケーション"],
        weaknesses: &["計画が苦手", "感情に鈍感", "細部を軽視", "ルーチンが苦手"],
        work_style: "即座に行動。変化と挑戦を好む",
        communication: "直接的でエネルギッシュ。事実を重視",
        stress_factors: &["ルーチンワーク", "過度の管理", "感情的な対立"],
        motivation_factors: &["行動", "挑戦", "自由", "成果"],
        team_role: "実行者・交渉者",
        management_style: "行動と挑戦を提供。結果で評価",
    },
    MbtiProfile {
        mbti_type: MbtiType::Esfp,
        name: "エンターテイナー",
        description: "楽観的で社交的、現在を楽しむ",
        strengths: &["社交性", "楽観性", "適応力", "創造性"],
        weaknesses: &["計画が苦手", "細部を軽視", "批判に敏感", "ルーチンが苦手"],
        work_style: "楽しく社交的な環境で働く。変化を好む",
        communication: "エネルギッシュで楽観的。感情を大切にする",
        stress_factors: &["ルーチンワーク", "過度の管理", "批判"],
        motivation_factors: &["楽しさ", "他者とのつながり", "自由", "創造性"],
        team_role: "モチベーター・創造者",
        management_style: "楽しく社交的な環境を提供。感謝を表現",
    },
];

/// Table lookup; the enum discriminant is the row.
pub fn lookup_mbti_profile(mbti_type: MbtiType) -> &'static MbtiProfile {
    &MBTI_PROFILES[mbti_type as usize]
}
